//! Fixed-delay request pacing
//!
//! Product-detail fetches and cover downloads are paced with one fixed
//! delay to bound the request rate against the target host. The delay is
//! a collaborator injected at the call sites rather than a sleep buried
//! in the crawl logic, so tests run with [`Pacer::none`] and finish
//! without real waiting.

use std::time::Duration;

/// Applies a fixed pause between requests to the same host
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Creates a pacer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a pacer from a delay in milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Creates a pacer that never waits
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the configured delay
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
