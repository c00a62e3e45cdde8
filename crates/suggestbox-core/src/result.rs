//! Convenience result type alias for SuggestBox.

use crate::error::AppError;

/// A specialized `Result` type for SuggestBox operations.
pub type AppResult<T> = Result<T, AppError>;
