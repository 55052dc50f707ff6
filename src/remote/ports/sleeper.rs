//! Backoff delay port.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller between retries.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Waits for `delay`.
    async fn sleep(&self, delay: Duration);
}
