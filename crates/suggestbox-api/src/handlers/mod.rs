//! Route handlers organized by domain.

pub mod admin;
pub mod department;
pub mod health;
pub mod suggestion;
