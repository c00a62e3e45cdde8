//! `AuthAdmin` extractor: pulls the session token from the Authorization
//! header, validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use suggestbox_core::error::AppError;
use suggestbox_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated admin context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub RequestContext);

impl AuthAdmin {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthAdmin {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AppError::unauthorized("Authorization header is required"))?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::unauthorized("Authorization header format must be Bearer {token}")
            })?;

        let claims = state.jwt_decoder.validate(token).map_err(|err| {
            debug!(error = %err, path = %parts.uri.path(), "Rejected session token");
            AppError::from(err)
        })?;

        Ok(AuthAdmin(RequestContext::new(claims)))
    }
}
