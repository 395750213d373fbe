//! Pacing for calls to the text generator.

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::sync::Arc;
use std::time::Duration;

/// Default spacing between generator calls
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1000);

/// Shared limiter allowing one generator call per `min_interval`.
///
/// Clones share the same bucket, so every request in the process competes
/// for the same provider budget. A zero interval disables limiting.
#[derive(Clone)]
pub struct GenerationRateLimiter {
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
    min_interval: Duration,
}

impl GenerationRateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        let limiter = Quota::with_period(min_interval)
            .map(|quota| Arc::new(RateLimiter::direct(quota)));

        Self {
            limiter,
            min_interval,
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }

    /// Wait until the next generator call is allowed
    pub async fn acquire(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

impl Default for GenerationRateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl std::fmt::Debug for GenerationRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationRateLimiter")
            .field("min_interval", &self.min_interval)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_disabled_never_waits() {
        let limiter = GenerationRateLimiter::disabled();
        assert!(!limiter.is_enabled());

        let start = Instant::now();
        for _ in 0..10 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_second_call_is_spaced() {
        let limiter = GenerationRateLimiter::new(Duration::from_millis(100));
        let start = Instant::now();

        limiter.acquire().await;
        limiter.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(80));
    }

    #[tokio::test]
    async fn test_clones_share_budget() {
        let limiter = GenerationRateLimiter::new(Duration::from_millis(100));
        let other = limiter.clone();
        let start = Instant::now();

        limiter.acquire().await;
        other.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(80));
    }
}
