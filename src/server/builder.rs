//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve configuration the way the binary does
///
/// The YAML file is optional; environment variables always win.
pub async fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();

    let config = if config_path.exists() {
        Config::from_file(config_path).await?
    } else {
        warn!(
            "Configuration file {:?} not found, using defaults",
            config_path
        );
        Config::default()
    };

    let config = config.apply_env()?;
    config.validate()?;
    Ok(config)
}

/// Load configuration and serve until stopped
pub async fn run_server<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!("🍌 Starting nano-banana gateway");

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Failed to load .env file: {}", e),
    }

    let config = load_config(config_path).await?;

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!(
        "🌐 Server starting at: http://{}",
        config.server().address()
    );
    info!("📋 API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/nano-banana/generate - Generate or edit an image");
    info!("   GET  /api/presets - Preset prompts");
    info!("   GET  /api/view-angles - Six-view angles");
    info!("🎨 Upstream: {} (model {})", config.upstream().api_base, config.upstream().model);

    server.start().await
}
