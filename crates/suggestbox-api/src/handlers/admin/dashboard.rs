//! Dashboard statistics.

use axum::Json;
use axum::extract::State;

use suggestbox_entity::stats::DashboardStats;

use crate::error::ApiResult;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> ApiResult<Json<DashboardStats>> {
    let stats = state.dashboard_service.stats(auth.context()).await?;
    Ok(Json(stats))
}
