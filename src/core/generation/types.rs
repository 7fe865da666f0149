//! Inbound and outbound shapes of the generation proxy

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MISSING_PROMPT: &str = "Request body is missing a prompt";

/// Body accepted by `POST /api/nano-banana/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// Optional `data:<mime>;base64,<payload>` image to edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
}

impl GenerateRequest {
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        Self {
            prompt: prompt.into(),
            reference_image: None,
        }
    }

    pub fn with_reference_image<S: Into<String>>(mut self, data_url: S) -> Self {
        self.reference_image = Some(data_url.into());
        self
    }

    /// Parse a raw request body
    ///
    /// Bodies that are not JSON are treated like an empty object, so they
    /// fail on the missing prompt rather than on syntax.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self::from_value(&value)
    }

    /// Extract a request from an arbitrary JSON value
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| GatewayError::bad_request(MISSING_PROMPT))?;

        let prompt = match object.get("prompt") {
            Some(Value::String(prompt)) => prompt.clone(),
            _ => return Err(GatewayError::bad_request(MISSING_PROMPT)),
        };

        let reference_image = match object.get("referenceImage") {
            None | Some(Value::Null) => None,
            Some(Value::String(image)) => Some(image.clone()),
            Some(_) => {
                return Err(GatewayError::bad_request(
                    "referenceImage must be a data URL string",
                ));
            }
        };

        let request = Self {
            prompt,
            reference_image,
        };
        request.validate()?;
        Ok(request)
    }

    /// Reject blank prompts
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(GatewayError::bad_request(MISSING_PROMPT));
        }
        Ok(())
    }

    /// The reference image, treating an empty string as absent
    pub fn reference_image(&self) -> Option<&str> {
        self.reference_image.as_deref().filter(|s| !s.is_empty())
    }
}

/// Normalized success body: exactly one of the two channels is filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub url: Option<String>,
    pub base64: Option<String>,
}

impl GenerateResponse {
    pub fn from_url<S: Into<String>>(url: S) -> Self {
        Self {
            url: Some(url.into()),
            base64: None,
        }
    }

    pub fn from_base64<S: Into<String>>(base64: S) -> Self {
        Self {
            url: None,
            base64: Some(base64.into()),
        }
    }

    /// Something an `<img src>` can display: the URL, or a PNG data URL
    pub fn image_reference(&self) -> Option<String> {
        match (&self.url, &self.base64) {
            (Some(url), _) => Some(url.clone()),
            (None, Some(b64)) => Some(format!("data:image/png;base64,{}", b64)),
            (None, None) => None,
        }
    }
}

/// Shown when a response carries neither image channel
pub const NO_IMAGE_DATA: &str = "The image API returned neither a URL nor base64 data";

/// `response_format` values understood by the upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Url,
    B64Json,
}

/// Image entry of the upstream `data` array
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
}

impl UpstreamImage {
    /// Pull the first image out of an upstream body
    ///
    /// Any shape other than `{data: [{...}]}` yields `None`; non-string or
    /// empty fields count as absent.
    pub fn first_from(body: &Value) -> Option<Self> {
        let first = body.get("data")?.as_array()?.first()?;
        let field = |name: &str| {
            first
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            url: field("url"),
            b64_json: field("b64_json"),
        })
    }
}

/// Reduce an upstream success body to `{url, base64}`
pub fn normalize_upstream_body(body: &Value) -> Result<GenerateResponse> {
    let image = UpstreamImage::first_from(body).unwrap_or_default();

    if image.url.is_none() && image.b64_json.is_none() {
        return Err(GatewayError::invalid_upstream_response(
            "first data entry has neither url nor b64_json",
        ));
    }

    Ok(GenerateResponse {
        url: image.url,
        base64: image.b64_json,
    })
}
