//! Reply repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_entity::suggestion::Reply;

const REPLY_COLUMNS: &str = "SELECT r.id, r.suggestion_id, r.content, r.created_at, \
     a.id AS author_id, a.username AS author_username, a.role AS author_role \
     FROM replies r JOIN admin_users a ON a.id = r.admin_id";

/// Repository for admin replies.
#[derive(Debug, Clone)]
pub struct ReplyRepository {
    pool: SqlitePool,
}

impl ReplyRepository {
    /// Create a new reply repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the replies of a suggestion, oldest first.
    pub async fn list_for_suggestion(&self, suggestion_id: i64) -> AppResult<Vec<Reply>> {
        sqlx::query_as::<_, Reply>(&format!(
            "{REPLY_COLUMNS} WHERE r.suggestion_id = ?1 ORDER BY r.created_at ASC, r.id ASC"
        ))
        .bind(suggestion_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list replies", e))
    }

    /// Store a reply written by `admin_id`.
    pub async fn create(
        &self,
        suggestion_id: i64,
        admin_id: i64,
        content: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Reply> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO replies (suggestion_id, admin_id, content, created_at) \
             VALUES (?1, ?2, ?3, ?4) RETURNING id",
        )
        .bind(suggestion_id)
        .bind(admin_id)
        .bind(content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found("Suggestion or admin no longer exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create reply", e),
        })?;

        sqlx::query_as::<_, Reply>(&format!("{REPLY_COLUMNS} WHERE r.id = ?1"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load reply", e))
    }

    /// Count replies authored by an admin.
    pub async fn count_by_admin(&self, admin_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE admin_id = ?1")
            .bind(admin_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count replies", e))
    }
}
