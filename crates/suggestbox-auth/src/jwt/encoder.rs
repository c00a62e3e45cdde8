//! Session token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use suggestbox_core::config::AuthConfig;
use suggestbox_core::error::AppError;
use suggestbox_entity::admin::AdminUser;

use super::claims::Claims;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: chrono::Duration::hours(config.token_ttl_hours as i64),
        }
    }

    /// Issues a token for the admin, valid from now.
    pub fn issue(&self, admin: &AdminUser) -> Result<String, AppError> {
        self.issue_at(admin, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(&self, admin: &AdminUser, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims::for_admin(admin, now, self.ttl);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
