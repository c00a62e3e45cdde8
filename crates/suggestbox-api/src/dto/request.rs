//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use suggestbox_entity::admin::AdminRole;
use suggestbox_service::admin::{CreateAdminRequest, UpdateAdminRequest};
use suggestbox_service::suggestion::SubmitSuggestion;

/// Anonymous suggestion submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitSuggestionRequest {
    /// Short title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Addressed department; absent or `0` means all departments.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Optional submitter name.
    #[serde(default)]
    pub submitter_name: Option<String>,
    /// Optional submitter class.
    #[serde(default)]
    pub submitter_class: Option<String>,
    /// Whether the suggestion may be listed publicly.
    #[serde(default)]
    pub is_public: bool,
}

impl From<SubmitSuggestionRequest> for SubmitSuggestion {
    fn from(req: SubmitSuggestionRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            category: req.category,
            department_id: req.department_id,
            submitter_name: req.submitter_name,
            submitter_class: req.submitter_class,
            is_public: req.is_public,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Status change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    /// Target status, e.g. `in-progress`.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Reply body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplyRequest {
    /// Reply text.
    #[validate(length(min = 1, message = "Reply content is required"))]
    pub content: String,
}

/// Bulk delete body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkDeleteRequest {
    /// Suggestion IDs to delete.
    #[validate(length(min = 1, message = "At least one suggestion ID is required"))]
    pub ids: Vec<i64>,
}

/// Create admin request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminBody {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Initial password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role.
    pub role: AdminRole,
    /// Department affiliation.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Cross-department access.
    #[serde(default)]
    pub can_view_all: bool,
}

impl From<CreateAdminBody> for CreateAdminRequest {
    fn from(body: CreateAdminBody) -> Self {
        Self {
            username: body.username,
            password: body.password,
            role: body.role,
            department_id: body.department_id,
            can_view_all: body.can_view_all,
        }
    }
}

/// Update admin request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAdminBody {
    /// New role.
    #[serde(default)]
    pub role: Option<AdminRole>,
    /// New department; `0` clears it.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// New cross-department flag.
    #[serde(default)]
    pub can_view_all: Option<bool>,
    /// New password; blank keeps the current one.
    #[serde(default)]
    pub password: Option<String>,
}

impl From<UpdateAdminBody> for UpdateAdminRequest {
    fn from(body: UpdateAdminBody) -> Self {
        Self {
            role: body.role,
            department_id: body.department_id,
            can_view_all: body.can_view_all,
            password: body.password.filter(|p| !p.is_empty()),
        }
    }
}

/// Create or rename a department.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, message = "Department name is required"))]
    pub name: String,
}
