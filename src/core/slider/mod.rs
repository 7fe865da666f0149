//! Headless comparison slider
//!
//! The boundary math and the drag state machine live here; rendering and
//! event wiring belong to whatever implements [`SliderHost`].

pub mod fullscreen;
pub mod geometry;
pub mod host;
pub mod widget;

#[cfg(test)]
mod mock;

pub use fullscreen::{FullscreenComparisonSlider, FullscreenLayout};
pub use geometry::{ContainerBounds, SliderPosition};
pub use host::{FullscreenError, FullscreenHost, ListenerHandle, ObserverHandle, SliderHost};
pub use widget::{
    ComparisonSlider, DragState, ImageWidth, PointerEvent, SliderLayout, SliderProps,
};
