//! Public suggestion handlers: submit, track, browse, upvote.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use suggestbox_core::types::pagination::PageResponse;
use suggestbox_entity::suggestion::SuggestionDetail;

use crate::dto::request::SubmitSuggestionRequest;
use crate::dto::response::{TrackingCodeResponse, UpvoteResponse};
use crate::error::ApiResult;
use crate::extractors::{IdPath, ListParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/suggestions
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SubmitSuggestionRequest>,
) -> ApiResult<(StatusCode, Json<TrackingCodeResponse>)> {
    let tracking_code = state.suggestion_service.submit(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(TrackingCodeResponse { tracking_code }),
    ))
}

/// GET /api/v1/suggestions/{tracking_code}
pub async fn track(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> ApiResult<Json<SuggestionDetail>> {
    let detail = state
        .suggestion_service
        .lookup_by_tracking_code(&tracking_code)
        .await?;
    Ok(Json(detail))
}

/// GET /api/v1/suggestions
pub async fn list_public(
    State(state): State<AppState>,
    params: ListParams,
) -> ApiResult<Json<PageResponse<SuggestionDetail>>> {
    let page = state
        .suggestion_service
        .list_public(params.page, params.department_id)
        .await?;
    Ok(Json(page))
}

/// POST /api/v1/suggestions/{id}/upvote
pub async fn upvote(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<UpvoteResponse>> {
    let upvotes = state.suggestion_service.upvote(id).await?;
    Ok(Json(UpvoteResponse { upvotes }))
}
