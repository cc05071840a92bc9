//! Delay port
//!
//! Backoff waits go through this port so tests can observe them without
//! sleeping.

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production delay backed by the tokio timer
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

