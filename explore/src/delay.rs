//! Pacing between a reveal trigger and the reveal itself.
//!
//! The explore page pauses briefly before showing the next page. The pause is
//! a capability passed into the session so tests can run without waiting.

use async_trait::async_trait;
use std::time::Duration;

/// Strategy for the pause before a reveal.
#[async_trait]
pub trait RevealDelay: Send + Sync {
    /// Wait before the next page is revealed.
    async fn wait(&self);
}

/// Sleep for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[async_trait]
impl RevealDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Reveal immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl RevealDelay for NoDelay {
    async fn wait(&self) {}
}
