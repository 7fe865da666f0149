//! Single-image edit flow: upload, instruct, process, compare

use crate::core::catalog::PresetPrompt;
use crate::core::generation::{GenerateRequest, ImageGenerator, NO_IMAGE_DATA};
use crate::core::slider::SliderProps;
use crate::utils::error::GatewayError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Original upload and the latest successful edit of it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageState {
    original: Option<String>,
    processed: Option<String>,
}

impl ImageState {
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn processed(&self) -> Option<&str> {
        self.processed.as_deref()
    }

    /// Replace the original; a processed result never outlives its source
    pub fn set_original<S: Into<String>>(&mut self, original: S) {
        self.original = Some(original.into());
        self.processed = None;
    }

    pub fn set_processed<S: Into<String>>(&mut self, processed: S) {
        self.processed = Some(processed.into());
    }
}

/// Which image(s) the editor shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Original,
    Processed,
    Compare,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Upload an image and enter an editing instruction first")]
    MissingInput,

    #[error("{}", NO_IMAGE_DATA)]
    NoImageData,

    #[error(transparent)]
    Generation(#[from] GatewayError),
}

/// State behind the image editor page
pub struct EditSession<G: ImageGenerator> {
    generator: G,
    images: ImageState,
    prompt: String,
    view_mode: ViewMode,
    error: Option<String>,
}

impl<G: ImageGenerator> EditSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            images: ImageState::default(),
            prompt: String::new(),
            view_mode: ViewMode::default(),
            error: None,
        }
    }

    pub fn images(&self) -> &ImageState {
        &self.images
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start over with a freshly uploaded image (a data URL)
    pub fn upload<S: Into<String>>(&mut self, data_url: S) {
        self.images.set_original(data_url);
        self.prompt.clear();
        self.view_mode = ViewMode::Original;
        self.error = None;
    }

    pub fn set_prompt<S: Into<String>>(&mut self, prompt: S) {
        self.prompt = prompt.into();
    }

    pub fn apply_preset(&mut self, preset: &PresetPrompt) {
        self.prompt = preset.prompt.to_string();
    }

    /// Show a different view; comparing needs a processed image
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == ViewMode::Original || self.images.processed.is_some() {
            self.view_mode = mode;
        }
    }

    /// Send the original and the trimmed prompt to the generator
    ///
    /// On success the processed image is stored and the view switches to
    /// compare. On failure the message is kept in [`Self::error`]. Dropping
    /// the future mid-call leaves the session as it was before the call.
    pub async fn process(&mut self) -> Result<String, SessionError> {
        let prompt = self.prompt.trim().to_string();
        let Some(original) = self.images.original.clone().filter(|_| !prompt.is_empty()) else {
            return self.fail(SessionError::MissingInput);
        };

        let request = GenerateRequest::new(prompt).with_reference_image(original);
        let outcome = self.generator.generate(request).await;
        self.error = None;

        let image = match outcome {
            Ok(response) => match response.image_reference() {
                Some(image) => image,
                None => return self.fail(SessionError::NoImageData),
            },
            Err(e) => return self.fail(e.into()),
        };

        debug!("edit session received processed image");
        self.images.set_processed(image.clone());
        self.view_mode = ViewMode::Compare;
        Ok(image)
    }

    /// Slider inputs once both images exist
    pub fn slider_props(&self) -> Option<SliderProps> {
        match (self.images.original(), self.images.processed()) {
            (Some(before), Some(after)) => Some(SliderProps::new(before, after)),
            _ => None,
        }
    }

    fn fail(&mut self, error: SessionError) -> Result<String, SessionError> {
        warn!("edit session failed: {}", error);
        self.error = Some(error.to_string());
        Err(error)
    }
}
