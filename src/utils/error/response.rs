//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Error body returned to callers: `{error, details?}`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl GatewayError {
    /// Body sent back for this error
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            GatewayError::BadRequest(msg) => ErrorResponse::new(msg.clone()),
            GatewayError::InvalidReferenceImage(_) => ErrorResponse::new(self.to_string()),
            GatewayError::MissingCredential(msg) => ErrorResponse::new(msg.clone()),
            GatewayError::Config(_) => ErrorResponse::new(self.to_string()),
            GatewayError::Upstream { body, .. } => {
                ErrorResponse::new("Image API call failed").with_details(body.clone())
            }
            GatewayError::InvalidUpstreamResponse(_) => {
                ErrorResponse::new("Image API returned no usable image data")
            }
            GatewayError::Timeout(msg) => {
                ErrorResponse::new("Image API call timed out").with_details(msg.clone())
            }
            GatewayError::HttpClient(e) => {
                ErrorResponse::new("Unexpected failure while calling the image API")
                    .with_details(e.to_string())
            }
            GatewayError::Serialization(e) => {
                ErrorResponse::new("Unexpected failure while calling the image API")
                    .with_details(e.to_string())
            }
            GatewayError::Yaml(_) | GatewayError::Io(_) | GatewayError::Internal(_) => {
                ErrorResponse::new("Unexpected failure while calling the image API")
                    .with_details(self.to_string())
            }
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) | GatewayError::InvalidReferenceImage(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::MissingCredential(_) | GatewayError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Pass the upstream status through untouched
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::InvalidUpstreamResponse(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::HttpClient(_)
            | GatewayError::Serialization(_)
            | GatewayError::Yaml(_)
            | GatewayError::Io(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}
