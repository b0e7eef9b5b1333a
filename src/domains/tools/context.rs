//! Shared state handed to every tool call.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::config::Config;
use crate::domains::catalog::Latency;
use crate::domains::navigation::Navigator;
use crate::domains::widgets::json_format::JsonFormatterSession;

/// Everything a tool may need beyond its own parameters.
#[derive(Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub navigator: Arc<Navigator>,
    /// Output of the JSON formatter survives a failed action.
    pub json_session: Arc<Mutex<JsonFormatterSession>>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>, navigator: Arc<Navigator>) -> Self {
        Self {
            config,
            navigator,
            json_session: Arc::new(Mutex::new(JsonFormatterSession::new())),
        }
    }

    /// Delay policy for simulated processing.
    pub fn latency(&self) -> Latency {
        Latency::new(self.config.catalog.simulate_latency)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domains::catalog::CatalogService;

    /// Context over the built-in catalog with default configuration.
    pub fn context() -> ToolContext {
        context_with(Config::default())
    }

    pub fn context_with(config: Config) -> ToolContext {
        let service = Arc::new(CatalogService::builtin().expect("built-in catalog"));
        ToolContext::new(Arc::new(config), Arc::new(Navigator::new(service)))
    }
}
