//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use suggestbox_auth::jwt::JwtDecoder;
use suggestbox_auth::ratelimit::SlidingWindowLimiter;
use suggestbox_core::config::AppConfig;
use suggestbox_database::DatabasePool;
use suggestbox_service::{
    AdminService, AuthService, DashboardService, DepartmentService, SuggestionService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Limiter shared by every rate-limited public route
    pub rate_limiter: SlidingWindowLimiter,

    // ── Services ─────────────────────────────────────────────
    /// Admin login
    pub auth_service: Arc<AuthService>,
    /// Suggestion lifecycle
    pub suggestion_service: Arc<SuggestionService>,
    /// Admin account management
    pub admin_service: Arc<AdminService>,
    /// Department management
    pub department_service: Arc<DepartmentService>,
    /// Dashboard statistics
    pub dashboard_service: Arc<DashboardService>,
}
