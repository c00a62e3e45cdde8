//! Department entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum department name length in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// A school department that suggestions are addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: i64,
    /// Unique display name.
    pub name: String,
}
