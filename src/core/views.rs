//! Six-view object generation

use crate::core::catalog::{VIEW_ANGLES, ViewAngle};
use crate::core::generation::{GenerateRequest, ImageGenerator, NO_IMAGE_DATA};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Progress of one angle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AngleStatus {
    #[default]
    Idle,
    Loading,
    Success { url: String },
    Error { message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewBatchError {
    #[error("Describe the object before generating views")]
    EmptyDescription,

    #[error("Unknown view angle: {0}")]
    UnknownAngle(String),
}

/// Build the prompt sent for one angle
pub fn compose_prompt(description: &str, angle: &ViewAngle) -> String {
    format!(
        "{}\n\n{}\n\nMake sure this is the {}, keep the background clean and simple, resolution at least 1024px.",
        description.trim(),
        angle.prompt_hint,
        angle.title
    )
}

/// Generates every catalog angle of one object, one upstream call per angle
pub struct ViewBatch<G: ImageGenerator> {
    generator: G,
    description: String,
    reference_image: Option<String>,
    results: Vec<(&'static ViewAngle, AngleStatus)>,
}

impl<G: ImageGenerator> ViewBatch<G> {
    pub fn new<S: Into<String>>(generator: G, description: S) -> Self {
        Self {
            generator,
            description: description.into(),
            reference_image: None,
            results: VIEW_ANGLES.iter().map(|a| (a, AngleStatus::Idle)).collect(),
        }
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) {
        self.description = description.into();
    }

    /// Optional reference photo (data URL) sent with every angle
    pub fn set_reference_image(&mut self, data_url: Option<String>) {
        self.reference_image = data_url;
    }

    pub fn status(&self, angle_id: &str) -> Option<&AngleStatus> {
        self.results
            .iter()
            .find(|(angle, _)| angle.id == angle_id)
            .map(|(_, status)| status)
    }

    pub fn results(&self) -> impl Iterator<Item = (&'static ViewAngle, &AngleStatus)> {
        self.results.iter().map(|(angle, status)| (*angle, status))
    }

    pub fn success_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, status)| matches!(status, AngleStatus::Success { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        for (_, status) in &mut self.results {
            *status = AngleStatus::Idle;
        }
    }

    /// Generate every angle in catalog order
    ///
    /// A failing angle is recorded and the batch moves on. Returns the
    /// number of successful angles.
    pub async fn run_all(&mut self) -> Result<usize, ViewBatchError> {
        self.ensure_description()?;
        self.reset();

        for index in 0..self.results.len() {
            self.run_one(index).await;
        }

        let succeeded = self.success_count();
        info!("view batch finished: {}/{} angles", succeeded, self.results.len());
        Ok(succeeded)
    }

    /// Regenerate a single angle
    pub async fn retry(&mut self, angle_id: &str) -> Result<&AngleStatus, ViewBatchError> {
        self.ensure_description()?;
        let index = self
            .results
            .iter()
            .position(|(angle, _)| angle.id == angle_id)
            .ok_or_else(|| ViewBatchError::UnknownAngle(angle_id.to_string()))?;

        self.run_one(index).await;
        Ok(&self.results[index].1)
    }

    fn ensure_description(&self) -> Result<(), ViewBatchError> {
        if self.description.trim().is_empty() {
            return Err(ViewBatchError::EmptyDescription);
        }
        Ok(())
    }

    async fn run_one(&mut self, index: usize) {
        let (angle, slot) = {
            let (angle, status) = &mut self.results[index];
            (*angle, status)
        };
        let slot = LoadingSlot::enter(slot);

        let mut request = GenerateRequest::new(compose_prompt(&self.description, angle));
        request.reference_image = self.reference_image.clone();

        let status = match self.generator.generate(request).await {
            Ok(response) => match response.image_reference() {
                Some(url) => AngleStatus::Success { url },
                None => AngleStatus::Error {
                    message: NO_IMAGE_DATA.to_string(),
                },
            },
            Err(e) => {
                warn!("view {} failed: {}", angle.id, e);
                AngleStatus::Error {
                    message: e.to_string(),
                }
            }
        };
        slot.finish(status);
    }
}

/// Holds an angle in `Loading` for the duration of one call
///
/// If the call is cancelled before finishing, the angle goes back to `Idle`.
struct LoadingSlot<'a>(&'a mut AngleStatus);

impl<'a> LoadingSlot<'a> {
    fn enter(status: &'a mut AngleStatus) -> Self {
        *status = AngleStatus::Loading;
        Self(status)
    }

    fn finish(self, status: AngleStatus) {
        *self.0 = status;
    }
}

impl Drop for LoadingSlot<'_> {
    fn drop(&mut self) {
        if *self.0 == AngleStatus::Loading {
            *self.0 = AngleStatus::Idle;
        }
    }
}
