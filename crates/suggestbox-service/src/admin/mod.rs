//! Admin login and admin account management.

pub mod auth;
pub mod service;

pub use auth::{AuthService, LoginResult};
pub use service::{AdminService, CreateAdminRequest, UpdateAdminRequest};
