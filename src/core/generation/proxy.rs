//! Request relay between the HTTP route and the upstream image API

use super::client::UpstreamClient;
use super::request::UpstreamRequest;
use super::types::{GenerateRequest, GenerateResponse, normalize_upstream_body};
use crate::config::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Anything that can turn a [`GenerateRequest`] into an image
///
/// The HTTP route and the client-side session flows only depend on this, so
/// they can be driven by a stub in tests.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

#[async_trait]
impl<T: ImageGenerator + ?Sized> ImageGenerator for Arc<T> {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        (**self).generate(request).await
    }
}

/// Validates inbound requests, relays them upstream and normalizes the answer
#[derive(Debug, Clone)]
pub struct GenerationProxy {
    client: UpstreamClient,
}

impl GenerationProxy {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        Ok(Self {
            client: UpstreamClient::new(config)?,
        })
    }

    pub fn config(&self) -> &UpstreamConfig {
        self.client.config()
    }

    /// Handle a raw HTTP body
    ///
    /// The credential is checked before the body is even looked at.
    pub async fn handle_body(&self, body: &[u8]) -> Result<GenerateResponse> {
        self.credential()?;
        let request = GenerateRequest::from_body(body)?;
        self.generate(request).await
    }

    /// Pick the upstream call for a request without sending it
    pub fn build_upstream_request(&self, request: GenerateRequest) -> Result<UpstreamRequest> {
        request.validate()?;
        UpstreamRequest::from_request(request, &self.config().model)
    }

    fn credential(&self) -> Result<&str> {
        self.config().api_key().ok_or_else(|| {
            GatewayError::missing_credential("IMAGE_API_KEY is not configured on the server")
        })
    }
}

#[async_trait]
impl ImageGenerator for GenerationProxy {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let api_key = self.credential()?;
        let upstream = self.build_upstream_request(request)?;
        let kind = upstream.kind();

        info!(
            "Relaying {} request ({} chars) to model {}",
            kind,
            upstream.prompt().chars().count(),
            self.config().model
        );

        let started = Instant::now();
        let body = self.client.send(upstream, api_key).await?;
        let response = normalize_upstream_body(&body)?;

        debug!(
            "Upstream {} succeeded in {:?} (url: {}, base64: {})",
            kind,
            started.elapsed(),
            response.url.is_some(),
            response.base64.is_some()
        );
        Ok(response)
    }
}
