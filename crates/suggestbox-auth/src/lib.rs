//! # suggestbox-auth
//!
//! Authentication and authorization building blocks for SuggestBox.
//!
//! ## Modules
//!
//! - `jwt`: session token issuing and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `access`: the access control evaluator and suggestion scoping
//! - `ratelimit`: sliding-window limiter for public endpoints

pub mod access;
pub mod jwt;
pub mod password;
pub mod ratelimit;

pub use access::{AccessEvaluator, Operation, Target};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::{PasswordHasher, PasswordValidator};
pub use ratelimit::{RateLimitExceeded, SlidingWindowLimiter};
