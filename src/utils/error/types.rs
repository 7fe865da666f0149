//! Error types for the gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The upstream credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Bad request errors (missing or empty prompt, malformed body)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The reference image is not a base64 data URL
    #[error("Cannot parse reference image: {0}")]
    InvalidReferenceImage(String),

    /// The upstream answered with a non-success status
    #[error("Upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The upstream answered 2xx but without a usable image
    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    /// The upstream call exceeded the configured timeout
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err.to_string())
        } else {
            GatewayError::HttpClient(err)
        }
    }
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_credential<S: Into<String>>(message: S) -> Self {
        Self::MissingCredential(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn invalid_reference_image<S: Into<String>>(message: S) -> Self {
        Self::InvalidReferenceImage(message.into())
    }

    pub fn upstream<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_upstream_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidUpstreamResponse(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the failure was raised before any upstream request was sent
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            GatewayError::BadRequest(_)
                | GatewayError::InvalidReferenceImage(_)
                | GatewayError::MissingCredential(_)
        )
    }
}
