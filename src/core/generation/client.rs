//! HTTP client for the upstream image API

use super::request::UpstreamRequest;
use crate::config::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::truncate_for_log;
use serde_json::Value;
use tracing::{debug, warn};

const LOGGED_BODY_CHARS: usize = 512;

/// Thin wrapper over `reqwest::Client` carrying the upstream settings
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Create a client whose every call is bounded by the configured timeout
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GatewayError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Send one request and return the parsed success body
    ///
    /// Non-2xx answers become [`GatewayError::Upstream`] with the status and
    /// raw body text preserved.
    pub async fn send(&self, request: UpstreamRequest, api_key: &str) -> Result<Value> {
        let url = request.url(&self.config);
        debug!("Calling upstream {} endpoint: {}", request.kind(), url);

        let builder = self.http.post(&url).bearer_auth(api_key);
        let response = match request {
            UpstreamRequest::Generate(payload) => builder.json(&payload).send().await?,
            UpstreamRequest::Edit(payload) => builder.multipart(payload.into_form()?).send().await?,
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(
                "Upstream returned {}: {}",
                status.as_u16(),
                truncate_for_log(&body, LOGGED_BODY_CHARS)
            );
            return Err(GatewayError::upstream(status.as_u16(), body));
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        Ok(body)
    }
}
