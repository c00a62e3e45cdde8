//! Query parameters shared by list endpoints.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use suggestbox_core::error::AppError;
use suggestbox_core::types::pagination::PageRequest;

use crate::error::ApiError;

/// Raw query string as sent by clients. Everything is read as text so bad
/// paging input normalizes instead of failing.
#[derive(Debug, Default, Deserialize)]
struct RawListParams {
    page: Option<String>,
    #[serde(alias = "pageSize")]
    page_size: Option<String>,
    department_id: Option<String>,
    status: Option<String>,
}

/// Parsed list parameters.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Normalized paging.
    pub page: PageRequest,
    /// Department filter; `None` when absent or not positive.
    pub department_id: Option<i64>,
    /// Status filter, unparsed.
    pub status: Option<String>,
}

impl ListParams {
    fn from_raw(raw: RawListParams) -> Result<Self, AppError> {
        let department_id = match raw.department_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let id: i64 = value
                    .parse()
                    .map_err(|_| AppError::validation(format!("Invalid department_id: {value}")))?;
                Some(id).filter(|id| *id > 0)
            }
        };

        Ok(Self {
            page: PageRequest::from_raw(raw.page.as_deref(), raw.page_size.as_deref()),
            department_id,
            status: raw.status.filter(|s| !s.trim().is_empty()),
        })
    }
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawListParams>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self::from_raw(raw)?)
    }
}
