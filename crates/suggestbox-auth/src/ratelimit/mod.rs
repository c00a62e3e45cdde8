//! Rate limiting for unauthenticated endpoints.

pub mod sliding_window;

pub use sliding_window::{RateLimitExceeded, SlidingWindowLimiter};
