//! Admin login.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use suggestbox_auth::jwt::JwtEncoder;
use suggestbox_auth::password::PasswordHasher;
use suggestbox_core::error::AppError;
use suggestbox_core::result::AppResult;
use suggestbox_database::repositories::AdminRepository;
use suggestbox_entity::admin::AdminUser;

/// Message shared by every credential failure.
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Signed session token.
    pub token: String,
    /// The authenticated admin.
    pub admin: AdminUser,
}

/// Verifies admin credentials and mints session tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Admin repository.
    admin_repo: Arc<AdminRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        admin_repo: Arc<AdminRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            admin_repo,
            hasher,
            encoder,
        }
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResult> {
        let Some(admin) = self.admin_repo.find_by_username(username.trim()).await? else {
            warn!(username, "Login failed: unknown username");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &admin.password_hash)? {
            warn!(admin_id = admin.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }

        let token = self.encoder.issue(&admin)?;
        info!(admin_id = admin.id, role = %admin.role, "Admin logged in");
        Ok(LoginResult { token, admin })
    }
}
