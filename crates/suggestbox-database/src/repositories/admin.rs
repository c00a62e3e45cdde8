//! Admin account repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_entity::admin::{AdminUser, CreateAdmin, UpdateAdmin};

const ADMIN_COLUMNS: &str = "SELECT a.id, a.username, a.password_hash, a.role, a.department_id, \
     d.name AS department_name, a.can_view_all, a.is_root, a.created_at \
     FROM admin_users a LEFT JOIN departments d ON d.id = a.department_id";

/// Repository for admin account CRUD and lookup operations.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an admin by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!("{ADMIN_COLUMNS} WHERE a.id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e))
    }

    /// Find an admin by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!("{ADMIN_COLUMNS} WHERE a.username = ?1"))
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by username", e)
            })
    }

    /// Find the root admin, if it has been seeded.
    pub async fn find_root(&self) -> AppResult<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!("{ADMIN_COLUMNS} WHERE a.is_root = 1 LIMIT 1"))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find root admin", e))
    }

    /// List every admin ordered by id.
    pub async fn list(&self) -> AppResult<Vec<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(&format!("{ADMIN_COLUMNS} ORDER BY a.id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list admins", e))
    }

    /// Count admins affiliated with a department.
    pub async fn count_by_department(&self, department_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM admin_users WHERE department_id = ?1")
            .bind(department_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count department admins", e)
            })
    }

    /// Create a new admin.
    pub async fn create(&self, data: &CreateAdmin, now: DateTime<Utc>) -> AppResult<AdminUser> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO admin_users \
             (username, password_hash, role, department_id, can_view_all, is_root, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(data.department_id)
        .bind(data.can_view_all)
        .bind(data.is_root)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("Department does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("Created admin disappeared"))
    }

    /// Write resolved account settings back. Returns `None` when the admin
    /// does not exist.
    pub async fn update(&self, data: &UpdateAdmin) -> AppResult<Option<AdminUser>> {
        let result = sqlx::query(
            "UPDATE admin_users SET role = ?1, department_id = ?2, can_view_all = ?3, \
             password_hash = COALESCE(?4, password_hash) \
             WHERE id = ?5 AND is_root = 0",
        )
        .bind(data.role)
        .bind(data.department_id)
        .bind(data.can_view_all)
        .bind(data.password_hash.as_deref())
        .bind(data.id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("Department does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update admin", e),
        })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(data.id).await
    }

    /// Replace an admin's password hash.
    pub async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE admin_users SET password_hash = ?1 WHERE id = ?2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update admin password", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a non-root admin.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = ?1 AND is_root = 0")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    AppError::conflict("Admin has authored replies and cannot be deleted")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete admin", e),
            })?;
        Ok(result.rows_affected() > 0)
    }
}
