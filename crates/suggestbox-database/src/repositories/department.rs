//! Department repository implementation.

use sqlx::SqlitePool;

use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_entity::department::Department;

/// Repository for department CRUD operations.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all departments ordered by id.
    pub async fn list(&self) -> AppResult<Vec<Department>> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list departments", e))
    }

    /// Find a department by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find department by id", e)
            })
    }

    /// Count departments.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count departments", e))
    }

    /// Create a department.
    pub async fn create(&self, name: &str) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, name, "Failed to create department"))
    }

    /// Rename a department. Returns `None` when it does not exist.
    pub async fn update(&self, id: i64, name: &str) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = ?1 WHERE id = ?2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, name, "Failed to update department"))
    }

    /// Delete a department. Suggestions addressed to it fall back to all
    /// departments through `ON DELETE SET NULL`.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    AppError::conflict("Department is still assigned to admin accounts")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete department", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_name_conflict(e: sqlx::Error, name: &str, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::conflict(format!("Department '{name}' already exists"))
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
