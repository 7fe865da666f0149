//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::generation::GenerationProxy;
use crate::utils::error::Result;
use std::sync::Arc;

/// Read-only state cloned into every worker
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration
    pub config: Arc<Config>,
    /// Relay to the upstream image API
    pub proxy: Arc<GenerationProxy>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let proxy = GenerationProxy::new(config.upstream.clone())?;
        Ok(Self {
            config: Arc::new(config),
            proxy: Arc::new(proxy),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
