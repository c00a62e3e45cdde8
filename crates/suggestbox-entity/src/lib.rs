//! # suggestbox-entity
//!
//! Domain entity models for SuggestBox. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod admin;
pub mod department;
pub mod stats;
pub mod suggestion;
