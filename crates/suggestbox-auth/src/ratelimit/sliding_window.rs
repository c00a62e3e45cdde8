//! Sliding-window request limiter keyed by client address.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use suggestbox_core::config::RateLimitConfig;
use suggestbox_core::error::AppError;

/// Number of tracked addresses above which stale entries are swept.
const SWEEP_THRESHOLD: usize = 4096;

/// A request was refused because its address used up the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Too many requests, please try again later")]
pub struct RateLimitExceeded {
    /// Time until the oldest recorded request leaves the window.
    pub retry_after: Duration,
}

impl From<RateLimitExceeded> for AppError {
    fn from(err: RateLimitExceeded) -> Self {
        AppError::rate_limited(err.to_string())
    }
}

/// Allows at most `max_requests` per address within any `window`.
///
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct SlidingWindowLimiter {
    /// Address → timestamps of accepted requests, oldest first.
    entries: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    /// Requests allowed per window.
    max_requests: usize,
    /// Window length.
    window: Duration,
}

impl SlidingWindowLimiter {
    /// Creates a limiter from configuration.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_limits(config.max_requests, Duration::from_secs(config.window_seconds))
    }

    /// Creates a limiter with explicit limits.
    pub fn with_limits(max_requests: usize, window: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Records a request from `key` now, or refuses it.
    pub async fn check(&self, key: &str) -> Result<(), RateLimitExceeded> {
        self.check_at(key, Instant::now()).await
    }

    /// Records a request from `key` at `now`, or refuses it.
    ///
    /// Refused requests are not recorded.
    pub async fn check_at(&self, key: &str, now: Instant) -> Result<(), RateLimitExceeded> {
        let mut entries = self.entries.lock().await;

        if entries.len() >= SWEEP_THRESHOLD {
            let window = self.window;
            entries.retain(|_, stamps| {
                prune(stamps, now, window);
                !stamps.is_empty()
            });
        }

        let stamps = entries.entry(key.to_string()).or_default();
        prune(stamps, now, self.window);

        if stamps.len() >= self.max_requests {
            let retry_after = stamps
                .front()
                .map(|oldest| self.window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(self.window);
            debug!(key, count = stamps.len(), ?retry_after, "Rate limit exceeded");
            return Err(RateLimitExceeded { retry_after });
        }

        stamps.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    async fn tracked_addresses(&self) -> usize {
        self.entries.lock().await.len()
    }
}

/// Drops timestamps that have left the window.
fn prune(stamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(oldest) = stamps.front() {
        if now.duration_since(*oldest) >= window {
            stamps.pop_front();
        } else {
            break;
        }
    }
}
