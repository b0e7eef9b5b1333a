//! Simulated network latency for catalog queries.

use std::time::Duration;
use tracing::trace;

/// Catalog operations that carry an artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCategories,
    GetCategory,
    ListTools,
    GetTool,
    ListToolsByCategory,
    ListFeaturedTools,
    SearchTools,
    IncrementToolUsage,
}

impl Operation {
    /// Delay applied to this operation when simulation is on.
    pub fn delay(self) -> Duration {
        let ms = match self {
            Self::ListCategories => 300,
            Self::GetCategory => 200,
            Self::ListTools => 400,
            Self::GetTool => 200,
            Self::ListToolsByCategory => 300,
            Self::ListFeaturedTools => 250,
            Self::SearchTools => 300,
            Self::IncrementToolUsage => 100,
        };
        Duration::from_millis(ms)
    }
}

/// Sleeps before a catalog operation when enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Wait for the operation's delay, or return immediately when disabled.
    pub async fn pause(&self, op: Operation) {
        self.sleep(op.delay()).await;
    }

    /// Wait for an arbitrary duration, or return immediately when disabled.
    pub async fn sleep(&self, duration: Duration) {
        if self.enabled {
            trace!("Simulating {:?} of latency", duration);
            tokio::time::sleep(duration).await;
        }
    }
}
