//! Department listing and super-admin management.

use std::sync::Arc;

use tracing::info;

use suggestbox_auth::access::{AccessEvaluator, Operation};
use suggestbox_core::error::AppError;
use suggestbox_core::result::AppResult;
use suggestbox_database::repositories::{AdminRepository, DepartmentRepository};
use suggestbox_entity::department::Department;
use suggestbox_entity::department::model::MAX_NAME_LENGTH;

use crate::context::RequestContext;

/// Handles department reads and writes.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    /// Department repository.
    department_repo: Arc<DepartmentRepository>,
    /// Admin repository, for reference checks.
    admin_repo: Arc<AdminRepository>,
    /// Access control evaluator.
    evaluator: AccessEvaluator,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(department_repo: Arc<DepartmentRepository>, admin_repo: Arc<AdminRepository>) -> Self {
        Self {
            department_repo,
            admin_repo,
            evaluator: AccessEvaluator::new(),
        }
    }

    /// Lists every department. Public.
    pub async fn list(&self) -> AppResult<Vec<Department>> {
        self.department_repo.list().await
    }

    /// Lists every department for the management screen.
    pub async fn list_managed(&self, ctx: &RequestContext) -> AppResult<Vec<Department>> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::ManageDepartments)?;
        self.department_repo.list().await
    }

    /// Creates a department.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> AppResult<Department> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::ManageDepartments)?;
        let name = validate_name(name)?;
        let department = self.department_repo.create(&name).await?;
        info!(department_id = department.id, name = %department.name, "Department created");
        Ok(department)
    }

    /// Renames a department.
    pub async fn update(&self, ctx: &RequestContext, id: i64, name: &str) -> AppResult<Department> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::ManageDepartments)?;
        let name = validate_name(name)?;
        let department = self
            .department_repo
            .update(id, &name)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;
        info!(department_id = id, name = %department.name, "Department renamed");
        Ok(department)
    }

    /// Deletes a department that no admin belongs to.
    ///
    /// Suggestions addressed to it become addressed to all departments.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        self.evaluator
            .require_super_admin(&ctx.claims, Operation::ManageDepartments)?;
        self.department_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;

        let admins = self.admin_repo.count_by_department(id).await?;
        if admins > 0 {
            return Err(AppError::conflict(format!(
                "Department is still assigned to {admins} admin account(s)"
            )));
        }

        if !self.department_repo.delete(id).await? {
            return Err(AppError::not_found("Department not found"));
        }
        info!(department_id = id, "Department deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Department name is required"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Department name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
