//! # nano-banana-rs
//!
//! Back end of an AI image editing app.
//!
//! - **Generation proxy**: takes a prompt and an optional reference image
//!   (a base64 data URL), calls the upstream `images/generations` or
//!   `images/edits` endpoint and answers with `{url, base64}`.
//! - **Comparison slider**: a headless before/after slider whose boundary
//!   follows pointer and touch drags, with an optional fullscreen variant.
//! - **Client flows**: the single-image edit session and six-view object
//!   generation built on top of the proxy.
//!
//! ## Gateway mode
//!
//! ```rust,no_run
//! use nano_banana::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     Gateway::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Calling the proxy directly
//!
//! ```rust,no_run
//! use nano_banana::{GenerateRequest, GenerationProxy, ImageGenerator, config::UpstreamConfig};
//!
//! # async fn demo() -> nano_banana::Result<()> {
//! let proxy = GenerationProxy::new(UpstreamConfig {
//!     api_key: Some("sk-...".to_string()),
//!     ..Default::default()
//! })?;
//! let response = proxy.generate(GenerateRequest::new("a banana in space")).await?;
//! println!("{:?}", response.image_reference());
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use crate::core::generation::{
    DataUrl, GenerateRequest, GenerateResponse, GenerationProxy, ImageGenerator, UpstreamRequest,
};
pub use crate::core::session::{EditSession, ImageState, ViewMode};
pub use crate::core::slider::{ComparisonSlider, FullscreenComparisonSlider, SliderHost, SliderProps};
pub use crate::core::views::{AngleStatus, ViewBatch};

use tracing::info;

/// The HTTP gateway assembled from a configuration
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");
        let server = server::HttpServer::new(&config)?;
        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serve until the process is stopped
    pub async fn run(self) -> Result<()> {
        info!("Configuration: {:#?}", self.config);
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
