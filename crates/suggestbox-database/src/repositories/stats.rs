//! Dashboard aggregation queries.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_entity::stats::DepartmentCount;
use suggestbox_entity::suggestion::{SuggestionScope, SuggestionStatus};

const SCOPE: &str = "(?1 IS NULL OR s.department_id = ?1 OR s.department_id IS NULL)";

/// Status totals within a scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct StatusTotals {
    /// All suggestions.
    pub total: i64,
    /// Suggestions in `pending-review`.
    pub pending_review: i64,
    /// Suggestions in `in-progress`.
    pub in_progress: i64,
    /// Suggestions in `resolved`.
    pub resolved: i64,
}

/// Timestamps of a suggestion touched inside the trend window.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Last change time.
    pub updated_at: DateTime<Utc>,
    /// Current status.
    pub status: SuggestionStatus,
}

/// Read-only aggregation queries for the admin dashboard.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    /// Create a new stats repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count suggestions by status.
    pub async fn status_totals(&self, scope: SuggestionScope) -> AppResult<StatusTotals> {
        sqlx::query_as::<_, StatusTotals>(&format!(
            "SELECT COUNT(*) AS total, \
             COALESCE(SUM(CASE WHEN s.status = 'pending-review' THEN 1 ELSE 0 END), 0) AS pending_review, \
             COALESCE(SUM(CASE WHEN s.status = 'in-progress' THEN 1 ELSE 0 END), 0) AS in_progress, \
             COALESCE(SUM(CASE WHEN s.status = 'resolved' THEN 1 ELSE 0 END), 0) AS resolved \
             FROM suggestions s WHERE {SCOPE}"
        ))
        .bind(scope.department_id())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count statuses", e))
    }

    /// Suggestions created or changed at or after `since`.
    pub async fn activity_since(
        &self,
        scope: SuggestionScope,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<ActivityRow>> {
        sqlx::query_as::<_, ActivityRow>(&format!(
            "SELECT s.created_at, s.updated_at, s.status FROM suggestions s \
             WHERE {SCOPE} AND (s.created_at >= ?2 OR s.updated_at >= ?2)"
        ))
        .bind(scope.department_id())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load activity", e))
    }

    /// Suggestion counts per department, largest first.
    ///
    /// A department-scoped caller only sees its own department.
    pub async fn department_counts(
        &self,
        scope: SuggestionScope,
    ) -> AppResult<Vec<DepartmentCount>> {
        sqlx::query_as::<_, DepartmentCount>(
            "SELECT d.id AS department_id, d.name AS name, COUNT(s.id) AS count \
             FROM departments d LEFT JOIN suggestions s ON s.department_id = d.id \
             WHERE (?1 IS NULL OR d.id = ?1) \
             GROUP BY d.id, d.name ORDER BY count DESC, d.id ASC",
        )
        .bind(scope.department_id())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count by department", e)
        })
    }
}
