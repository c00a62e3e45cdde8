//! Suggestion triage handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use suggestbox_core::types::pagination::PageResponse;
use suggestbox_entity::suggestion::{Reply, SuggestionDetail};

use crate::dto::request::{BulkDeleteRequest, ReplyRequest, UpdateStatusRequest};
use crate::dto::response::DeletedResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthAdmin, IdPath, ListParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/admin/suggestions
pub async fn list(
    State(state): State<AppState>,
    auth: AuthAdmin,
    params: ListParams,
) -> ApiResult<Json<PageResponse<SuggestionDetail>>> {
    let page = state
        .suggestion_service
        .list_for_admin(
            auth.context(),
            params.page,
            params.status.as_deref(),
            params.department_id,
        )
        .await?;
    Ok(Json(page))
}

/// GET /api/v1/admin/suggestions/{id}
pub async fn detail(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuggestionDetail>> {
    let detail = state
        .suggestion_service
        .get_for_admin(auth.context(), id)
        .await?;
    Ok(Json(detail))
}

/// PUT /api/v1/admin/suggestions/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<SuggestionDetail>> {
    let detail = state
        .suggestion_service
        .update_status(auth.context(), id, &req.status)
        .await?;
    Ok(Json(detail))
}

/// POST /api/v1/admin/suggestions/{id}/replies
pub async fn reply(
    State(state): State<AppState>,
    auth: AuthAdmin,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<ReplyRequest>,
) -> ApiResult<(StatusCode, Json<Reply>)> {
    let reply = state
        .suggestion_service
        .add_reply(auth.context(), id, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(reply)))
}

/// DELETE /api/v1/admin/suggestions
pub async fn bulk_delete(
    State(state): State<AppState>,
    auth: AuthAdmin,
    ValidatedJson(req): ValidatedJson<BulkDeleteRequest>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = state
        .suggestion_service
        .bulk_delete(auth.context(), &req.ids)
        .await?;
    Ok(Json(DeletedResponse { deleted }))
}
