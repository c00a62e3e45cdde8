//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::AuthAdmin;
pub use json::ValidatedJson;
pub use pagination::ListParams;
pub use path::IdPath;
