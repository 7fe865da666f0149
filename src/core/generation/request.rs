//! Outbound request shapes: prompt-only generation vs. reference-image edit

use super::data_url::DataUrl;
use super::types::{GenerateRequest, ResponseFormat};
use crate::config::UpstreamConfig;
use crate::utils::error::{GatewayError, Result};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// JSON body of `{base}/images/generations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPayload {
    pub model: String,
    pub prompt: String,
    pub response_format: ResponseFormat,
}

/// Fields of the multipart `{base}/images/edits` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPayload {
    pub model: String,
    pub prompt: String,
    pub image: DataUrl,
}

impl EditPayload {
    /// Build the multipart form: text parts `model` and `prompt`, file part `image`
    pub fn into_form(self) -> Result<Form> {
        let file_name = self.image.file_name();
        let mime_type = self.image.mime_type().to_string();

        let mut image = Part::bytes(self.image.into_bytes()).file_name(file_name);
        // reqwest only accepts `type/subtype`; anything else goes out untyped
        if mime_type.contains('/') {
            image = image
                .mime_str(&mime_type)
                .map_err(|e| GatewayError::invalid_reference_image(e.to_string()))?;
        }

        Ok(Form::new()
            .text("model", self.model)
            .text("prompt", self.prompt)
            .part("image", image))
    }
}

/// The single upstream call made for one inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamRequest {
    Generate(GenerationPayload),
    Edit(EditPayload),
}

impl UpstreamRequest {
    /// Choose the call for a validated request
    ///
    /// The reference image is decoded here, so a malformed data URL fails
    /// before anything is sent.
    pub fn from_request(request: GenerateRequest, model: &str) -> Result<Self> {
        match request.reference_image() {
            Some(data_url) => {
                let image = DataUrl::parse(data_url)?;
                Ok(UpstreamRequest::Edit(EditPayload {
                    model: model.to_string(),
                    prompt: request.prompt,
                    image,
                }))
            }
            None => Ok(UpstreamRequest::Generate(GenerationPayload {
                model: model.to_string(),
                prompt: request.prompt,
                response_format: ResponseFormat::Url,
            })),
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamRequest::Generate(_) => "generate",
            UpstreamRequest::Edit(_) => "edit",
        }
    }

    /// Target endpoint under the configured base URL
    pub fn url(&self, config: &UpstreamConfig) -> String {
        match self {
            UpstreamRequest::Generate(_) => config.generations_url(),
            UpstreamRequest::Edit(_) => config.edits_url(),
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            UpstreamRequest::Generate(payload) => &payload.prompt,
            UpstreamRequest::Edit(payload) => &payload.prompt,
        }
    }
}
