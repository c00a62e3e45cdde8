//! Application builder: wires repositories, services, and state into an
//! Axum app.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use suggestbox_auth::jwt::{JwtDecoder, JwtEncoder};
use suggestbox_auth::password::{PasswordHasher, PasswordValidator};
use suggestbox_auth::ratelimit::SlidingWindowLimiter;
use suggestbox_core::config::AppConfig;
use suggestbox_core::error::{AppError, ErrorKind};
use suggestbox_core::result::AppResult;
use suggestbox_database::DatabasePool;
use suggestbox_database::migration::run_migrations;
use suggestbox_database::repositories::{
    AdminRepository, DepartmentRepository, ReplyRepository, StatsRepository, SuggestionRepository,
};
use suggestbox_service::{
    AdminService, AuthService, BootstrapService, DashboardService, DepartmentService,
    SuggestionService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Migrates and seeds the database, then assembles the application state.
pub async fn initialize(config: AppConfig, db: DatabasePool) -> AppResult<AppState> {
    // ── Step 1: Schema ───────────────────────────────────────────
    run_migrations(db.pool()).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let pool = db.pool().clone();
    let admin_repo = Arc::new(AdminRepository::new(pool.clone()));
    let department_repo = Arc::new(DepartmentRepository::new(pool.clone()));
    let suggestion_repo = Arc::new(SuggestionRepository::new(pool.clone()));
    let reply_repo = Arc::new(ReplyRepository::new(pool.clone()));
    let stats_repo = Arc::new(StatsRepository::new(pool));

    // ── Step 3: Auth building blocks ─────────────────────────────
    if config.auth.uses_placeholder_secret() {
        warn!("JWT secret is the placeholder value; set auth.jwt_secret");
    }
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let rate_limiter = SlidingWindowLimiter::new(&config.rate_limit);

    // ── Step 4: Seed data ────────────────────────────────────────
    BootstrapService::new(
        Arc::clone(&admin_repo),
        Arc::clone(&department_repo),
        Arc::clone(&password_hasher),
    )
    .run(&config.bootstrap)
    .await?;

    // ── Step 5: Services ─────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&admin_repo),
        Arc::clone(&password_hasher),
        jwt_encoder,
    ));
    let suggestion_service = Arc::new(SuggestionService::new(
        suggestion_repo,
        Arc::clone(&reply_repo),
        Arc::clone(&department_repo),
    ));
    let admin_service = Arc::new(AdminService::new(
        Arc::clone(&admin_repo),
        Arc::clone(&department_repo),
        reply_repo,
        password_hasher,
        password_validator,
    ));
    let department_service = Arc::new(DepartmentService::new(department_repo, admin_repo));
    let dashboard_service = Arc::new(DashboardService::new(stats_repo));

    info!(
        max_requests = config.rate_limit.max_requests,
        window_seconds = config.rate_limit.window_seconds,
        "Application state initialized"
    );

    Ok(AppState {
        config: Arc::new(config),
        db,
        jwt_decoder,
        rate_limiter,
        auth_service,
        suggestion_service,
        admin_service,
        department_service,
        dashboard_service,
    })
}

/// Initializes the application and serves it until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> AppResult<()> {
    let addr = config.server.bind_address();
    let state = initialize(config, db.clone()).await?;
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, format!("Failed to bind {addr}"), e)
    })?;
    info!(address = %addr, "SuggestBox listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    db.close().await;
    info!("SuggestBox stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
