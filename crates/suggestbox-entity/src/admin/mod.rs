//! Admin account domain entities.

pub mod model;
pub mod role;

pub use model::{AdminProfile, AdminUser, CreateAdmin, UpdateAdmin};
pub use role::AdminRole;
