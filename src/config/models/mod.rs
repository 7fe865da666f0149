//! Configuration data models
//!
//! This module defines the configuration structures used by the gateway.

#![allow(missing_docs)]

pub mod server;
pub mod upstream;

pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
///
/// Reference images travel inline as base64 data URLs, so this is sized for
/// a phone photo plus encoding overhead.
pub fn default_max_body_size() -> usize {
    20 * 1024 * 1024 // 20MB
}

/// Default upstream API base URL
pub fn default_api_base() -> String {
    "https://api.tu-zi.com/v1".to_string()
}

/// Default upstream image model
pub fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

/// Default upstream timeout in seconds
pub fn default_upstream_timeout() -> u64 {
    120
}

pub fn default_true() -> bool {
    true
}
