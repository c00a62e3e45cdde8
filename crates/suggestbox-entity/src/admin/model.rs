//! Admin account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::AdminRole;

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUser {
    /// Unique admin identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Admin role.
    pub role: AdminRole,
    /// Affiliated department, if any.
    pub department_id: Option<i64>,
    /// Name of the affiliated department, filled by joined queries.
    #[sqlx(default)]
    pub department_name: Option<String>,
    /// Cross-department read/reply/status access.
    pub can_view_all: bool,
    /// The seeded root account, which can never be changed or removed.
    pub is_root: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// The public profile of this admin.
    pub fn profile(&self) -> AdminProfile {
        AdminProfile {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// The part of an admin that may be shown next to their replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Admin identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Admin role.
    pub role: AdminRole,
}

/// Data required to create a new admin.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: AdminRole,
    /// Affiliated department.
    pub department_id: Option<i64>,
    /// Cross-department access flag.
    pub can_view_all: bool,
    /// Marks the seeded root account.
    pub is_root: bool,
}

/// Resolved values written back when an admin is updated.
#[derive(Debug, Clone)]
pub struct UpdateAdmin {
    /// The admin ID to update.
    pub id: i64,
    /// New role.
    pub role: AdminRole,
    /// New department.
    pub department_id: Option<i64>,
    /// New cross-department flag.
    pub can_view_all: bool,
    /// Replacement password hash, if the password changes.
    pub password_hash: Option<String>,
}
