//! Sliding-window rate limiting for public write and lookup routes.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderValue;
use axum::http::header::RETRY_AFTER;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use suggestbox_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Key used when no client address can be determined.
const UNKNOWN_CLIENT: &str = "unknown";

/// Refuses the request with 429 once its client has used up the window.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client = client_address(&request, state.config.rate_limit.trust_forwarded_for);

    match state.rate_limiter.check(&client).await {
        Ok(()) => next.run(request).await,
        Err(exceeded) => {
            warn!(
                client = %client,
                path = %request.uri().path(),
                retry_after_ms = exceeded.retry_after.as_millis() as u64,
                "Rate limit exceeded"
            );
            let retry_secs = exceeded.retry_after.as_secs_f64().ceil().max(1.0) as u64;
            let mut response = ApiError(AppError::from(exceeded)).into_response();
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_secs));
            response
        }
    }
}

/// Resolves the address the limiter keys on.
///
/// The first `X-Forwarded-For` entry wins when proxies are trusted,
/// otherwise the socket peer address is used.
pub fn client_address(request: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(addr) = forwarded {
            return addr.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
