//! Admin account management. Super admins only.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use suggestbox_auth::access::{AccessEvaluator, Operation, Target};
use suggestbox_auth::password::{PasswordHasher, PasswordValidator};
use suggestbox_core::error::AppError;
use suggestbox_core::result::AppResult;
use suggestbox_database::repositories::{AdminRepository, DepartmentRepository, ReplyRepository};
use suggestbox_entity::admin::{AdminRole, AdminUser, CreateAdmin, UpdateAdmin};

use crate::context::RequestContext;

/// Request to create an admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminRequest {
    /// Unique username.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Role assignment.
    pub role: AdminRole,
    /// Department affiliation.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Cross-department read/reply/status access.
    #[serde(default)]
    pub can_view_all: bool,
}

/// Request to change an admin account. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdminRequest {
    /// New role.
    #[serde(default)]
    pub role: Option<AdminRole>,
    /// New department; `0` clears it.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// New cross-department flag.
    #[serde(default)]
    pub can_view_all: Option<bool>,
    /// New password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Handles administrative account management operations.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Admin repository.
    admin_repo: Arc<AdminRepository>,
    /// Department repository.
    department_repo: Arc<DepartmentRepository>,
    /// Reply repository.
    reply_repo: Arc<ReplyRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Access control evaluator.
    evaluator: AccessEvaluator,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        admin_repo: Arc<AdminRepository>,
        department_repo: Arc<DepartmentRepository>,
        reply_repo: Arc<ReplyRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            admin_repo,
            department_repo,
            reply_repo,
            hasher,
            validator,
            evaluator: AccessEvaluator::new(),
        }
    }

    /// Lists all admins with their department names.
    pub async fn list_admins(&self, ctx: &RequestContext) -> AppResult<Vec<AdminUser>> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::ListAdmins)?;
        self.admin_repo.list().await
    }

    /// Creates a new admin account.
    pub async fn create_admin(
        &self,
        ctx: &RequestContext,
        req: CreateAdminRequest,
    ) -> AppResult<AdminUser> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::CreateAdmin)?;

        let username = req.username.trim().to_string();
        self.validator.validate_username(&username)?;
        self.validator.validate(&req.password)?;

        let (department_id, can_view_all) = self
            .resolve_assignment(
                ctx,
                Operation::CreateAdmin,
                req.role,
                req.department_id,
                req.can_view_all,
            )
            .await?;

        if self.admin_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' already exists"
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let admin = self
            .admin_repo
            .create(
                &CreateAdmin {
                    username,
                    password_hash,
                    role: req.role,
                    department_id,
                    can_view_all,
                    is_root: false,
                },
                Utc::now(),
            )
            .await?;

        info!(
            admin_id = admin.id,
            username = %admin.username,
            role = %admin.role,
            created_by = ctx.admin_id(),
            "Admin created"
        );
        Ok(admin)
    }

    /// Changes an admin account.
    pub async fn update_admin(
        &self,
        ctx: &RequestContext,
        id: i64,
        req: UpdateAdminRequest,
    ) -> AppResult<AdminUser> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::UpdateAdmin)?;
        let existing = self.target(ctx, id, Operation::UpdateAdmin).await?;

        let role = req.role.unwrap_or(existing.role);
        let (department_id, can_view_all) = self
            .resolve_assignment(
                ctx,
                Operation::UpdateAdmin,
                role,
                req.department_id.or(existing.department_id),
                req.can_view_all.unwrap_or(existing.can_view_all),
            )
            .await?;

        let password_hash = match req.password.as_deref() {
            Some(password) => {
                self.validator.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let updated = self
            .admin_repo
            .update(&UpdateAdmin {
                id,
                role,
                department_id,
                can_view_all,
                password_hash,
            })
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        info!(admin_id = id, role = %updated.role, updated_by = ctx.admin_id(), "Admin updated");
        Ok(updated)
    }

    /// Deletes an admin account.
    pub async fn delete_admin(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::DeleteAdmin)?;
        self.target(ctx, id, Operation::DeleteAdmin).await?;

        if self.reply_repo.count_by_admin(id).await? > 0 {
            return Err(AppError::conflict(
                "Admin has authored replies and cannot be deleted",
            ));
        }
        if !self.admin_repo.delete(id).await? {
            return Err(AppError::not_found("Admin not found"));
        }

        info!(admin_id = id, deleted_by = ctx.admin_id(), "Admin deleted");
        Ok(())
    }

    /// Sets a new password for an admin by username, outside any request.
    pub async fn reset_password(&self, username: &str, password: &str) -> AppResult<()> {
        self.validator.validate(password)?;
        let admin = self
            .admin_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin '{username}' not found")))?;
        let hash = self.hasher.hash_password(password)?;
        self.admin_repo.update_password(admin.id, &hash).await?;
        info!(admin_id = admin.id, "Admin password reset");
        Ok(())
    }

    /// Loads an admin and checks it may be the target of `operation`.
    async fn target(
        &self,
        ctx: &RequestContext,
        id: i64,
        operation: Operation,
    ) -> AppResult<AdminUser> {
        let admin = self
            .admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        self.evaluator.evaluate(
            Some(&ctx.claims),
            operation,
            Target::Admin {
                is_root: admin.is_root,
            },
        )?;
        Ok(admin)
    }

    /// Applies the role invariants to a requested assignment.
    ///
    /// Super admins never carry a department. A department admin needs a
    /// department or the view-all flag, and the department must exist.
    async fn resolve_assignment(
        &self,
        ctx: &RequestContext,
        operation: Operation,
        role: AdminRole,
        department_id: Option<i64>,
        can_view_all: bool,
    ) -> AppResult<(Option<i64>, bool)> {
        let department_id = if role.is_super_admin() {
            None
        } else {
            department_id.filter(|id| *id > 0)
        };

        self.evaluator.evaluate(
            Some(&ctx.claims),
            operation,
            Target::AdminAssignment {
                role,
                department_id,
                can_view_all,
            },
        )?;

        if let Some(id) = department_id {
            self.department_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::validation("Department does not exist"))?;
        }
        Ok((department_id, can_view_all))
    }
}
