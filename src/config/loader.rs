//! Environment variable overrides
//!
//! Recognised variables:
//!
//! | Variable            | Field                 |
//! |---------------------|-----------------------|
//! | `GATEWAY_HOST`      | `server.host`         |
//! | `GATEWAY_PORT`      | `server.port`         |
//! | `GATEWAY_WORKERS`   | `server.workers`      |
//! | `IMAGE_API_BASE`    | `upstream.api_base`   |
//! | `IMAGE_MODEL`       | `upstream.model`      |
//! | `IMAGE_API_KEY`     | `upstream.api_key`    |
//! | `IMAGE_API_TIMEOUT` | `upstream.timeout`    |

use super::Config;
use crate::utils::error::{GatewayError, Result};
use tracing::debug;

impl Config {
    /// Overlay values from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("GATEWAY_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        if let Some(api_base) = lookup("IMAGE_API_BASE") {
            self.upstream.api_base = api_base;
        }
        if let Some(model) = lookup("IMAGE_MODEL") {
            self.upstream.model = model;
        }
        if let Some(api_key) = lookup("IMAGE_API_KEY") {
            self.upstream.api_key = Some(api_key);
        }
        if let Some(timeout) = lookup("IMAGE_API_TIMEOUT") {
            self.upstream.timeout = timeout
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid upstream timeout: {}", e)))?;
        }

        debug!("Environment overrides applied");
        Ok(self)
    }
}
