//! Shared fixtures for service unit tests.

use std::sync::Arc;

use chrono::Utc;

use suggestbox_auth::jwt::Claims;
use suggestbox_core::config::DatabaseConfig;
use suggestbox_database::DatabasePool;
use suggestbox_database::migration::run_migrations;
use suggestbox_database::repositories::{
    AdminRepository, DepartmentRepository, ReplyRepository, StatsRepository, SuggestionRepository,
};
use suggestbox_entity::admin::{AdminRole, AdminUser, CreateAdmin};

use crate::context::RequestContext;

/// Repositories over one migrated in-memory database.
pub struct Fixture {
    pub admins: Arc<AdminRepository>,
    pub departments: Arc<DepartmentRepository>,
    pub suggestions: Arc<SuggestionRepository>,
    pub replies: Arc<ReplyRepository>,
    pub stats: Arc<StatsRepository>,
}

impl Fixture {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let db = DatabasePool::connect(&config).await.unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.into_pool();
        Self {
            admins: Arc::new(AdminRepository::new(pool.clone())),
            departments: Arc::new(DepartmentRepository::new(pool.clone())),
            suggestions: Arc::new(SuggestionRepository::new(pool.clone())),
            replies: Arc::new(ReplyRepository::new(pool.clone())),
            stats: Arc::new(StatsRepository::new(pool)),
        }
    }

    pub async fn admin(
        &self,
        username: &str,
        role: AdminRole,
        department_id: Option<i64>,
        can_view_all: bool,
    ) -> AdminUser {
        self.admins
            .create(
                &CreateAdmin {
                    username: username.to_string(),
                    password_hash: "unused".to_string(),
                    role,
                    department_id,
                    can_view_all,
                    is_root: false,
                },
                Utc::now(),
            )
            .await
            .unwrap()
    }
}

/// A request context for an admin, as if it had just logged in.
pub fn ctx(admin: &AdminUser) -> RequestContext {
    RequestContext::new(Claims::for_admin(
        admin,
        Utc::now(),
        chrono::Duration::hours(24),
    ))
}
