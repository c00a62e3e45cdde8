//! The access control evaluator.
//!
//! A pure decision over `(claims, operation, target)`. Rules, in order:
//!
//! 1. No claims: unauthenticated.
//! 2. Super admins may do everything and see every department.
//! 3. Department admins with `can_view_all` act on any suggestion but are
//!    refused administrative operations.
//! 4. Other department admins only act on suggestions of their own
//!    department or suggestions addressed to all departments.
//! 5. Administrative operations require a super admin.
//! 6. The root admin is never the target of an update or delete.
//! 7. A department admin assignment needs a department or `can_view_all`.

use suggestbox_core::error::AppError;
use suggestbox_core::result::AppResult;
use suggestbox_entity::suggestion::SuggestionScope;

use super::operation::{Operation, Target};
use crate::jwt::Claims;

/// Decides whether a caller may perform an operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessEvaluator;

impl AccessEvaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an operation against a target.
    pub fn evaluate(
        &self,
        claims: Option<&Claims>,
        operation: Operation,
        target: Target,
    ) -> AppResult<()> {
        let claims = claims.ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        if operation.is_administrative() && !claims.is_super_admin() {
            return Err(AppError::forbidden(format!(
                "Only super admins may {operation}"
            )));
        }

        match target {
            Target::Collection => {
                if operation.is_administrative() {
                    Ok(())
                } else {
                    self.scope(Some(claims)).map(|_| ())
                }
            }
            Target::Suggestion { department_id } => {
                let scope = self.scope(Some(claims))?;
                if scope.permits(department_id) {
                    Ok(())
                } else {
                    Err(AppError::forbidden(format!(
                        "You may not {operation} of other departments"
                    )))
                }
            }
            Target::Admin { is_root } => {
                if is_root && matches!(operation, Operation::UpdateAdmin | Operation::DeleteAdmin)
                {
                    Err(AppError::forbidden("The root admin cannot be modified"))
                } else {
                    Ok(())
                }
            }
            Target::AdminAssignment {
                role,
                department_id,
                can_view_all,
            } => {
                if !role.is_super_admin() && department_id.is_none() && !can_view_all {
                    Err(AppError::validation(
                        "A department admin needs a department unless can_view_all is set",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// The suggestion scope of a caller, used to filter list queries.
    pub fn scope(&self, claims: Option<&Claims>) -> AppResult<SuggestionScope> {
        let claims = claims.ok_or_else(|| AppError::unauthorized("Authentication required"))?;
        claims.scope().ok_or_else(|| {
            AppError::forbidden("Your account is not assigned to a department")
        })
    }

    /// Shorthand for administrative operations on no particular target.
    pub fn require_super_admin(&self, claims: &Claims, operation: Operation) -> AppResult<()> {
        self.evaluate(Some(claims), operation, Target::Collection)
    }
}
