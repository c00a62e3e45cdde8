//! Admin account management (super admin only).

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use suggestbox_entity::admin::AdminUser;

use crate::dto::request::{CreateAdminBody, UpdateAdminBody};
use crate::error::ApiResult;
use crate::extractors::{AuthAdmin, IdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/admin/users
pub async fn list_admins(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> ApiResult<Json<Vec<AdminUser>>> {
    let admins = state.admin_service.list_admins(auth.context()).await?;
    Ok(Json(admins))
}

/// POST /api/v1/admin/users
pub async fn create_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    ValidatedJson(req): ValidatedJson<CreateAdminBody>,
) -> ApiResult<(StatusCode, Json<AdminUser>)> {
    let admin = state
        .admin_service
        .create_admin(auth.context(), req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// PUT /api/v1/admin/users/{id}
pub async fn update_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateAdminBody>,
) -> ApiResult<Json<AdminUser>> {
    let admin = state
        .admin_service
        .update_admin(auth.context(), id, req.into())
        .await?;
    Ok(Json(admin))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.admin_service.delete_admin(auth.context(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
