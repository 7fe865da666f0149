//! Comparison slider with a fullscreen toggle

use super::host::{FullscreenError, FullscreenHost, ListenerHandle};
use super::widget::{ComparisonSlider, PointerEvent, SliderLayout, SliderProps};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_BEFORE_LABEL: &str = "Original";
pub const DEFAULT_AFTER_LABEL: &str = "Edited";

/// Layout of the fullscreen-capable slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullscreenLayout {
    #[serde(flatten)]
    pub slider: SliderLayout,
    pub fullscreen: bool,
    pub show_fullscreen_button: bool,
}

/// Comparison slider that can present its container fullscreen
///
/// Permanent labels are hidden while fullscreen. The host's own exits
/// (Escape) arrive through [`Self::on_fullscreen_change`].
pub struct FullscreenComparisonSlider<H: FullscreenHost> {
    slider: ComparisonSlider<H>,
    fullscreen: bool,
    hovering: bool,
    change_listener: Option<ListenerHandle>,
}

impl<H: FullscreenHost> FullscreenComparisonSlider<H> {
    /// Mount the slider, falling back to "Original"/"Edited" labels
    pub fn mount(mut props: SliderProps, mut host: H) -> Self {
        if props.before_label.is_none() {
            props.before_label = Some(DEFAULT_BEFORE_LABEL.to_string());
        }
        if props.after_label.is_none() {
            props.after_label = Some(DEFAULT_AFTER_LABEL.to_string());
        }

        let change_listener = host.subscribe_fullscreen_change();
        let fullscreen = host.is_fullscreen();
        Self {
            slider: ComparisonSlider::mount(props, host),
            fullscreen,
            hovering: false,
            change_listener: Some(change_listener),
        }
    }

    pub fn slider(&self) -> &ComparisonSlider<H> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut ComparisonSlider<H> {
        &mut self.slider
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn handle_event(&mut self, event: PointerEvent) {
        self.slider.handle_event(event);
    }

    pub fn on_resize(&mut self, width: f64) {
        self.slider.on_resize(width);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Enter fullscreen, or leave it if the host is already fullscreen
    pub fn toggle_fullscreen(&mut self) -> Result<(), FullscreenError> {
        let host = self.slider.host_mut();
        if host.is_fullscreen() {
            host.exit_fullscreen()?;
            self.fullscreen = false;
        } else {
            host.request_fullscreen()?;
            self.fullscreen = true;
        }
        debug!("fullscreen toggled: {}", self.fullscreen);
        Ok(())
    }

    /// Host fullscreen-change notification
    pub fn on_fullscreen_change(&mut self) {
        self.fullscreen = self.slider.host().is_fullscreen();
    }

    pub fn layout(&self) -> FullscreenLayout {
        let mut slider = self.slider.layout();
        if self.fullscreen {
            slider.before_label = None;
            slider.after_label = None;
        }
        FullscreenLayout {
            slider,
            fullscreen: self.fullscreen,
            show_fullscreen_button: self.hovering || self.fullscreen,
        }
    }
}

impl<H: FullscreenHost> Drop for FullscreenComparisonSlider<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.change_listener.take() {
            self.slider.host_mut().unsubscribe_fullscreen_change(listener);
        }
    }
}
