//! Department management (super admin only).

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use suggestbox_entity::department::Department;

use crate::dto::request::DepartmentRequest;
use crate::error::ApiResult;
use crate::extractors::{AuthAdmin, IdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/admin/departments
pub async fn list_departments(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> ApiResult<Json<Vec<Department>>> {
    let departments = state.department_service.list_managed(auth.context()).await?;
    Ok(Json(departments))
}

/// POST /api/v1/admin/departments
pub async fn create_department(
    State(state): State<AppState>,
    auth: AuthAdmin,
    ValidatedJson(req): ValidatedJson<DepartmentRequest>,
) -> ApiResult<(StatusCode, Json<Department>)> {
    let department = state
        .department_service
        .create(auth.context(), &req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /api/v1/admin/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<DepartmentRequest>,
) -> ApiResult<Json<Department>> {
    let department = state
        .department_service
        .update(auth.context(), id, &req.name)
        .await?;
    Ok(Json(department))
}

/// DELETE /api/v1/admin/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state
        .department_service
        .delete(auth.context(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
