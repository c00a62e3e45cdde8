//! Rate limiting configuration for unauthenticated endpoints.

use serde::{Deserialize, Serialize};

/// Sliding-window limits applied per client address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per address inside one window.
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,
    /// Window length in seconds.
    #[serde(default = "default_window")]
    pub window_seconds: u64,
    /// Use the first `X-Forwarded-For` entry as the client address. Enable only
    /// behind a proxy that overwrites the header.
    #[serde(default = "default_trust_forwarded_for")]
    pub trust_forwarded_for: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window(),
            trust_forwarded_for: default_trust_forwarded_for(),
        }
    }
}

fn default_max_requests() -> usize {
    3
}

fn default_window() -> u64 {
    60
}

fn default_trust_forwarded_for() -> bool {
    false
}
