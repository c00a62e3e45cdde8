//! First-boot seed data configuration.

use serde::{Deserialize, Serialize};

/// Password shipped with the seeded root account.
pub const PLACEHOLDER_ROOT_PASSWORD: &str = "password123";

/// Seed data inserted when the database is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Username of the root super admin.
    #[serde(default = "default_root_username")]
    pub root_username: String,
    /// Initial password of the root super admin.
    #[serde(default = "default_root_password")]
    pub root_password: String,
    /// Departments created when none exist.
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,
}

impl BootstrapConfig {
    /// Whether the root password is still the shipped placeholder.
    pub fn uses_placeholder_password(&self) -> bool {
        self.root_password == PLACEHOLDER_ROOT_PASSWORD
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            root_username: default_root_username(),
            root_password: default_root_password(),
            departments: default_departments(),
        }
    }
}

fn default_root_username() -> String {
    "superadmin".to_string()
}

fn default_root_password() -> String {
    PLACEHOLDER_ROOT_PASSWORD.to_string()
}

fn default_departments() -> Vec<String> {
    vec![
        "Academic Affairs".to_string(),
        "Logistics".to_string(),
        "Student Affairs".to_string(),
    ]
}
