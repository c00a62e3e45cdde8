//! Admin reply entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::admin::{AdminProfile, AdminRole};

/// An admin reply attached to a suggestion.
///
/// Rows are read from a join with `admin_users`; the author columns are
/// expected as `author_id`, `author_username` and `author_role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Unique reply identifier.
    pub id: i64,
    /// The suggestion replied to.
    pub suggestion_id: i64,
    /// Reply text.
    pub content: String,
    /// Public profile of the replying admin.
    pub admin: AdminProfile,
    /// When the reply was written.
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for Reply {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            suggestion_id: row.try_get("suggestion_id")?,
            content: row.try_get("content")?,
            admin: AdminProfile {
                id: row.try_get("author_id")?,
                username: row.try_get("author_username")?,
                role: row.try_get::<AdminRole, _>("author_role")?,
            },
            created_at: row.try_get("created_at")?,
        })
    }
}
