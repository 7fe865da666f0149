//! Base64 data URL decoding for reference images

use crate::utils::error::{GatewayError, Result};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static DATA_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:(.+);base64,(.*)$").expect("Invalid data URL regex"));

/// Extension used when the MIME subtype is missing or unusable
pub const DEFAULT_EXTENSION: &str = "png";

/// A decoded `data:<mime>;base64,<payload>` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    bytes: Vec<u8>,
}

impl DataUrl {
    /// Parse and decode a data URL
    pub fn parse(input: &str) -> Result<Self> {
        let captures = DATA_URL_PATTERN.captures(input).ok_or_else(|| {
            GatewayError::invalid_reference_image("expected data:<mime-type>;base64,<payload>")
        })?;

        let mime_type = captures[1].to_string();
        let payload = &captures[2];

        let bytes = STANDARD
            .decode(payload)
            .or_else(|_| STANDARD_NO_PAD.decode(payload))
            .map_err(|e| {
                GatewayError::invalid_reference_image(format!("payload is not valid base64: {}", e))
            })?;

        Ok(Self { mime_type, bytes })
    }

    /// MIME type exactly as written in the data URL
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// File extension derived from the MIME subtype
    pub fn extension(&self) -> String {
        extension_for_mime(&self.mime_type)
    }

    /// File name attached to the multipart upload
    pub fn file_name(&self) -> String {
        format!("reference.{}", self.extension())
    }
}

impl FromStr for DataUrl {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Map `image/jpeg` to `jpeg`, `image/svg+xml` to `svg`, anything unusable to `png`
pub fn extension_for_mime(mime_type: &str) -> String {
    let subtype = mime_type
        .split('/')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .and_then(|s| s.split('+').next())
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if subtype.is_empty() || !subtype.chars().all(|c| c.is_ascii_alphanumeric()) {
        DEFAULT_EXTENSION.to_string()
    } else {
        subtype
    }
}
