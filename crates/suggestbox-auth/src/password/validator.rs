//! Credential policy enforcement for new admin accounts and passwords.

use suggestbox_core::config::AuthConfig;
use suggestbox_core::error::AppError;

/// Minimum username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Maximum username length in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Validates usernames and passwords against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a new password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }
        Ok(())
    }

    /// Validates a new username.
    pub fn validate_username(&self, username: &str) -> Result<(), AppError> {
        let len = username.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
            return Err(AppError::validation(format!(
                "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
            )));
        }
        if username.chars().any(char::is_whitespace) {
            return Err(AppError::validation("Username must not contain whitespace"));
        }
        Ok(())
    }
}
