//! # suggestbox-database
//!
//! SQLite connection management and concrete repository implementations
//! for all SuggestBox entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
