//! Public department listing.

use axum::Json;
use axum::extract::State;

use suggestbox_entity::department::Department;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/departments
pub async fn list_departments(State(state): State<AppState>) -> ApiResult<Json<Vec<Department>>> {
    let departments = state.department_service.list().await?;
    Ok(Json(departments))
}
