//! Pointer-to-percentage conversion

use serde::{Deserialize, Serialize};

/// Horizontal extent of the slider container, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Boundary position for a pointer at `client_x`
    ///
    /// The pointer is clamped to `[0, width]` relative to `left` first. A
    /// degenerate container (zero, negative or non-finite width) maps to 0.
    pub fn percentage_at(&self, client_x: f64) -> SliderPosition {
        if !self.width.is_finite() || self.width <= 0.0 || client_x.is_nan() {
            return SliderPosition::MIN;
        }
        let x = (client_x - self.left).clamp(0.0, self.width);
        SliderPosition::new(x / self.width * 100.0)
    }
}

/// Boundary between the two images, as a percentage of container width
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SliderPosition(f64);

impl SliderPosition {
    pub const MIN: SliderPosition = SliderPosition(0.0);
    pub const MAX: SliderPosition = SliderPosition(100.0);
    pub const CENTER: SliderPosition = SliderPosition(50.0);

    /// Clamp into `[0, 100]`; NaN becomes 0
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::MIN;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::CENTER
    }
}
