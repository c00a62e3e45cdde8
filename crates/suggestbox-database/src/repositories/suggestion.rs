//! Suggestion repository implementation.
//!
//! Every admin-facing query takes a [`SuggestionScope`] and applies it in
//! SQL, so counts and pages only ever contain rows the caller may see.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_core::types::pagination::{PageRequest, PageResponse};
use suggestbox_entity::suggestion::{
    CreateSuggestion, Suggestion, SuggestionScope, SuggestionStatus,
};

const SUGGESTION_COLUMNS: &str = "SELECT s.id, s.tracking_code, s.title, s.content, s.category, \
     s.department_id, d.name AS department_name, s.submitter_name, s.submitter_class, \
     s.status, s.is_public, s.upvotes, s.created_at, s.updated_at \
     FROM suggestions s LEFT JOIN departments d ON d.id = s.department_id";

/// `?1` scope department, `?2` status filter, `?3` department filter.
const SCOPED_FILTER: &str = "(?1 IS NULL OR s.department_id = ?1 OR s.department_id IS NULL) \
     AND (?2 IS NULL OR s.status = ?2) \
     AND (?3 IS NULL OR s.department_id = ?3)";

/// Public visibility predicate; `?1` department filter.
///
/// Statuses are taken from [`SuggestionStatus::is_publicly_listed`].
fn public_filter() -> String {
    let listed = SuggestionStatus::ALL
        .iter()
        .filter(|status| status.is_publicly_listed())
        .map(|status| format!("'{}'", status.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("s.is_public = 1 AND s.status IN ({listed}) AND (?1 IS NULL OR s.department_id = ?1)")
}

/// Repository for suggestion storage and scoped queries.
#[derive(Debug, Clone)]
pub struct SuggestionRepository {
    pool: SqlitePool,
}

impl SuggestionRepository {
    /// Create a new suggestion repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a suggestion by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Suggestion>> {
        sqlx::query_as::<_, Suggestion>(&format!("{SUGGESTION_COLUMNS} WHERE s.id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find suggestion by id", e)
            })
    }

    /// Find a suggestion by exact tracking code.
    pub async fn find_by_tracking_code(&self, code: &str) -> AppResult<Option<Suggestion>> {
        sqlx::query_as::<_, Suggestion>(&format!(
            "{SUGGESTION_COLUMNS} WHERE s.tracking_code = ?1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find suggestion by tracking code",
                e,
            )
        })
    }

    /// Check whether a tracking code is already taken.
    pub async fn tracking_code_exists(&self, code: &str) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM suggestions WHERE tracking_code = ?1)")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check tracking code", e)
            })
    }

    /// Insert a new suggestion in `pending-review` with zero upvotes.
    ///
    /// A tracking code collision surfaces as a `Conflict` error.
    pub async fn create(
        &self,
        data: &CreateSuggestion,
        now: DateTime<Utc>,
    ) -> AppResult<Suggestion> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO suggestions \
             (tracking_code, title, content, category, department_id, submitter_name, \
              submitter_class, status, is_public, upvotes, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 0, ?10, ?10) RETURNING id",
        )
        .bind(&data.tracking_code)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.category)
        .bind(data.department_id)
        .bind(&data.submitter_name)
        .bind(&data.submitter_class)
        .bind(SuggestionStatus::PendingReview)
        .bind(data.is_public)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Tracking code already in use")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("Department does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create suggestion", e),
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("Created suggestion disappeared"))
    }

    /// List publicly visible suggestions, newest first.
    pub async fn list_public(
        &self,
        department_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Suggestion>> {
        let filter = public_filter();
        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM suggestions s WHERE {filter}"))
                .bind(department_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to count public suggestions",
                        e,
                    )
                })?;

        let items = sqlx::query_as::<_, Suggestion>(&format!(
            "{SUGGESTION_COLUMNS} WHERE {filter} \
             ORDER BY s.created_at DESC, s.id DESC LIMIT ?2 OFFSET ?3"
        ))
        .bind(department_id)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list public suggestions", e)
        })?;

        Ok(PageResponse::new(items, *page, total as u64))
    }

    /// List suggestions within a scope, newest first.
    ///
    /// The department filter narrows the result inside the scope; callers
    /// decide whether it may be honored at all.
    pub async fn list_scoped(
        &self,
        scope: SuggestionScope,
        status: Option<SuggestionStatus>,
        department_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Suggestion>> {
        debug!(?scope, ?status, ?department_id, page = page.page, "Listing scoped suggestions");

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM suggestions s WHERE {SCOPED_FILTER}"))
                .bind(scope.department_id())
                .bind(status)
                .bind(department_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count suggestions", e)
                })?;

        let items = sqlx::query_as::<_, Suggestion>(&format!(
            "{SUGGESTION_COLUMNS} WHERE {SCOPED_FILTER} \
             ORDER BY s.created_at DESC, s.id DESC LIMIT ?4 OFFSET ?5"
        ))
        .bind(scope.department_id())
        .bind(status)
        .bind(department_id)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list suggestions", e))?;

        Ok(PageResponse::new(items, *page, total as u64))
    }

    /// Set a new status. Returns `false` when the suggestion does not exist.
    pub async fn update_status(
        &self,
        id: i64,
        status: SuggestionStatus,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE suggestions SET status = ?1, updated_at = ?2 WHERE id = ?3")
                .bind(status)
                .bind(now)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to update suggestion status",
                        e,
                    )
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a suggestion as changed, e.g. after a reply.
    pub async fn touch(&self, id: i64, now: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE suggestions SET updated_at = ?1 WHERE id = ?2")
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch suggestion", e))?;
        Ok(())
    }

    /// Atomically add one upvote and return the new count.
    pub async fn increment_upvotes(&self, id: i64) -> AppResult<Option<i64>> {
        sqlx::query_scalar(
            "UPDATE suggestions SET upvotes = upvotes + 1 WHERE id = ?1 RETURNING upvotes",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upvote suggestion", e))
    }

    /// Return `(id, department_id)` for each of `ids` that exists.
    pub async fn find_departments(&self, ids: &[i64]) -> AppResult<Vec<(i64, Option<i64>)>> {
        let mut found = Vec::with_capacity(ids.len());
        for &id in ids {
            let row: Option<(i64, Option<i64>)> =
                sqlx::query_as("SELECT id, department_id FROM suggestions WHERE id = ?1")
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            "Failed to look up suggestion departments",
                            e,
                        )
                    })?;
            found.extend(row);
        }
        Ok(found)
    }

    /// Delete suggestions and their replies in one transaction.
    ///
    /// Returns the number of suggestions removed. Nothing is committed if
    /// any statement fails.
    pub async fn delete_many(&self, ids: &[i64]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut deleted = 0;
        for &id in ids {
            sqlx::query("DELETE FROM replies WHERE suggestion_id = ?1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete replies", e)
                })?;

            deleted += sqlx::query("DELETE FROM suggestions WHERE id = ?1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete suggestion", e)
                })?
                .rows_affected();
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit bulk delete", e)
        })?;
        Ok(deleted)
    }
}
