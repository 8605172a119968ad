/*
[INPUT]:  Cool-down settings from ClientConfig
[OUTPUT]: Delay awaited after every successful call
[POS]:    HTTP layer - client-side throttling strategy
[UPDATE]: When adding throttling strategies
*/

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::http::ClientConfig;

/// Post-call delay strategy.
///
/// Runs only after a call succeeded; failures return immediately.
#[async_trait]
pub trait CoolDown: Send + Sync + Debug {
    async fn cool_down(&self);
}

/// Fixed sleep after each call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCoolDown {
    duration: Duration,
}

impl FixedCoolDown {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[async_trait]
impl CoolDown for FixedCoolDown {
    async fn cool_down(&self) {
        trace!(duration_ms = self.duration.as_millis() as u64, "cooling down");
        tokio::time::sleep(self.duration).await;
    }
}

/// No delay at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCoolDown;

#[async_trait]
impl CoolDown for NoCoolDown {
    async fn cool_down(&self) {}
}

/// Strategy selected by `cool_down` / `cool_down_time`
pub fn from_config(config: &ClientConfig) -> Arc<dyn CoolDown> {
    if config.cool_down {
        Arc::new(FixedCoolDown::new(config.cool_down_time))
    } else {
        Arc::new(NoCoolDown)
    }
}
