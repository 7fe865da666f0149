//! Upstream image API configuration

use super::*;
use crate::utils::logging::mask_secret;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Where and how the gateway reaches the image generation service
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://api.tu-zi.com/v1`
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model identifier sent with every call
    #[serde(default = "default_image_model")]
    pub model: String,
    /// Bearer credential; never serialized back out
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Timeout for a single upstream call, in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_image_model(),
            api_key: None,
            timeout: default_upstream_timeout(),
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(mask_secret))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl UpstreamConfig {
    /// The credential, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Per-call timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// `POST` target for prompt-only generation
    pub fn generations_url(&self) -> String {
        format!("{}/images/generations", self.api_base.trim_end_matches('/'))
    }

    /// `POST` target for reference-image edits
    pub fn edits_url(&self) -> String {
        format!("{}/images/edits", self.api_base.trim_end_matches('/'))
    }
}
