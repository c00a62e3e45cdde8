//! First-boot seeding of departments and the root admin.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use suggestbox_auth::password::PasswordHasher;
use suggestbox_core::config::BootstrapConfig;
use suggestbox_core::result::AppResult;
use suggestbox_database::repositories::{AdminRepository, DepartmentRepository};
use suggestbox_entity::admin::{AdminRole, CreateAdmin};

/// Seeds an empty database. Safe to run on every startup.
#[derive(Debug, Clone)]
pub struct BootstrapService {
    /// Admin repository.
    admin_repo: Arc<AdminRepository>,
    /// Department repository.
    department_repo: Arc<DepartmentRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl BootstrapService {
    /// Creates a new bootstrap service.
    pub fn new(
        admin_repo: Arc<AdminRepository>,
        department_repo: Arc<DepartmentRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            admin_repo,
            department_repo,
            hasher,
        }
    }

    /// Seeds departments when none exist and the root admin when missing.
    pub async fn run(&self, config: &BootstrapConfig) -> AppResult<()> {
        if self.department_repo.count().await? == 0 {
            for name in &config.departments {
                self.department_repo.create(name).await?;
            }
            info!(count = config.departments.len(), "Seeded default departments");
        }

        if self.admin_repo.find_root().await?.is_none() {
            let password_hash = self.hasher.hash_password(&config.root_password)?;
            let root = self
                .admin_repo
                .create(
                    &CreateAdmin {
                        username: config.root_username.clone(),
                        password_hash,
                        role: AdminRole::SuperAdmin,
                        department_id: None,
                        can_view_all: true,
                        is_root: true,
                    },
                    Utc::now(),
                )
                .await?;
            info!(admin_id = root.id, username = %root.username, "Seeded root super admin");
        }

        if config.uses_placeholder_password() {
            warn!(
                username = %config.root_username,
                "Root admin is configured with the placeholder password; set bootstrap.root_password"
            );
        }
        Ok(())
    }
}
