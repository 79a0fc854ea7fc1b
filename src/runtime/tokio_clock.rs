//! Tokio-backed cook clock.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::{ClockError, CookClock};

/// Cook clock backed by `tokio::time::sleep`.
///
/// Tokio sleeps cannot fail to deliver, so this implementation never returns
/// the error variant; it exists so tests can substitute clocks that do.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl CookClock for TokioClock {
    async fn wait(&self, duration: Duration) -> Result<(), ClockError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}
