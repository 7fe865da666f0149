//! Validators for the server and upstream sections

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating upstream configuration");

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(format!(
                "Upstream api_base must use http:// or https://, got: {}",
                self.api_base
            ));
        }

        if self.model.trim().is_empty() {
            return Err("Upstream model cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Upstream timeout must be greater than 0".to_string());
        }

        if self.timeout > 3600 {
            return Err("Upstream timeout should not exceed 1 hour".to_string());
        }

        // A missing api_key is not a configuration error: the gateway still
        // starts and every generate call answers 500 until one is supplied.
        Ok(())
    }
}
