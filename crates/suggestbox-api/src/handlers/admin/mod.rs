//! Admin handlers. Every route except login requires a session token.

pub mod auth;
pub mod dashboard;
pub mod departments;
pub mod suggestions;
pub mod users;
