//! Route definitions for the SuggestBox HTTP API.
//!
//! All routes are mounted under `/api/v1`. Submission, tracking-code lookup,
//! and upvotes share one rate limiter keyed by client address.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(public_routes(&state))
        .merge(admin_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Anonymous endpoints: departments, submission, tracking, upvotes
fn public_routes(state: &AppState) -> Router<AppState> {
    let limited =
        || axum_middleware::from_fn_with_state(state.clone(), middleware::rate_limit::rate_limit);

    Router::new()
        .route(
            "/departments",
            get(handlers::department::list_departments),
        )
        .route(
            "/suggestions",
            get(handlers::suggestion::list_public)
                .merge(post(handlers::suggestion::submit).route_layer(limited())),
        )
        .route(
            "/suggestions/{id}",
            get(handlers::suggestion::track).route_layer(limited()),
        )
        .route(
            "/suggestions/{id}/upvote",
            post(handlers::suggestion::upvote).route_layer(limited()),
        )
}

/// Admin endpoints: login, dashboard, triage, accounts, departments
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::admin::auth::login))
        .route(
            "/admin/dashboard/stats",
            get(handlers::admin::dashboard::stats),
        )
        .route(
            "/admin/suggestions",
            get(handlers::admin::suggestions::list)
                .delete(handlers::admin::suggestions::bulk_delete),
        )
        .route(
            "/admin/suggestions/{id}",
            get(handlers::admin::suggestions::detail),
        )
        .route(
            "/admin/suggestions/{id}/status",
            put(handlers::admin::suggestions::update_status),
        )
        .route(
            "/admin/suggestions/{id}/replies",
            post(handlers::admin::suggestions::reply),
        )
        .route(
            "/admin/users",
            get(handlers::admin::users::list_admins).post(handlers::admin::users::create_admin),
        )
        .route(
            "/admin/users/{id}",
            put(handlers::admin::users::update_admin).delete(handlers::admin::users::delete_admin),
        )
        .route(
            "/admin/departments",
            get(handlers::admin::departments::list_departments)
                .post(handlers::admin::departments::create_department),
        )
        .route(
            "/admin/departments/{id}",
            put(handlers::admin::departments::update_department)
                .delete(handlers::admin::departments::delete_department),
        )
}
