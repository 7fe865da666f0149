//! Headless before/after comparison slider

use super::geometry::SliderPosition;
use super::host::{ListenerHandle, ObserverHandle, SliderHost};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_BEFORE_ALT: &str = "Before image";
pub const DEFAULT_AFTER_ALT: &str = "After image";

/// Inputs of the comparison slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderProps {
    pub before_image: String,
    pub after_image: String,
    pub before_label: Option<String>,
    pub after_label: Option<String>,
    pub before_alt: String,
    pub after_alt: String,
    pub class_name: Option<String>,
}

impl SliderProps {
    pub fn new<B: Into<String>, A: Into<String>>(before_image: B, after_image: A) -> Self {
        Self {
            before_image: before_image.into(),
            after_image: after_image.into(),
            before_label: None,
            after_label: None,
            before_alt: DEFAULT_BEFORE_ALT.to_string(),
            after_alt: DEFAULT_AFTER_ALT.to_string(),
            class_name: None,
        }
    }

    pub fn with_labels<B: Into<String>, A: Into<String>>(mut self, before: B, after: A) -> Self {
        self.before_label = Some(before.into());
        self.after_label = Some(after.into());
        self
    }

    pub fn with_alts<B: Into<String>, A: Into<String>>(mut self, before: B, after: A) -> Self {
        self.before_alt = before.into();
        self.after_alt = after.into();
        self
    }

    pub fn with_class_name<S: Into<String>>(mut self, class_name: S) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Input delivered by the host
///
/// `MouseDown` and `TouchStart` come from the container itself; the rest are
/// global events, delivered only while a pointer subscription is active.
/// Touch variants carry the `clientX` of every active touch point.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    MouseDown { client_x: f64 },
    MouseMove { client_x: f64 },
    MouseUp,
    TouchStart { touches: Vec<f64> },
    TouchMove { touches: Vec<f64> },
    TouchEnd,
}

/// Drag state machine; a live listener registration exists only in `Dragging`
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { listener: ListenerHandle },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Width applied to the clipped "before" image
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ImageWidth {
    /// Pinned to the observed container width so it doesn't squash while clipped
    Pixels(f64),
    /// No width observed yet; fill the container
    Fill,
}

impl ImageWidth {
    pub fn to_css(self) -> String {
        match self {
            ImageWidth::Pixels(px) => format!("{}px", px),
            ImageWidth::Fill => "100%".to_string(),
        }
    }
}

/// Everything a renderer needs to draw the slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderLayout {
    pub before_image: String,
    pub after_image: String,
    pub before_alt: String,
    pub after_alt: String,
    /// Width of the clipping container around the "before" image
    pub clip_percent: f64,
    /// `left` of the drag handle
    pub handle_left_percent: f64,
    pub before_image_width: ImageWidth,
    pub before_label: Option<String>,
    pub after_label: Option<String>,
    pub class_name: Option<String>,
    pub dragging: bool,
}

/// Two stacked images with a draggable boundary
pub struct ComparisonSlider<H: SliderHost> {
    host: H,
    props: SliderProps,
    position: SliderPosition,
    drag: DragState,
    container_width: f64,
    observer: Option<ObserverHandle>,
}

impl<H: SliderHost> ComparisonSlider<H> {
    /// Attach to a host and start observing the container size
    pub fn mount(props: SliderProps, mut host: H) -> Self {
        let observer = host.observe_size();
        Self {
            host,
            props,
            position: SliderPosition::default(),
            drag: DragState::Idle,
            container_width: 0.0,
            observer: Some(observer),
        }
    }

    pub fn props(&self) -> &SliderProps {
        &self.props
    }

    pub fn set_props(&mut self, props: SliderProps) {
        self.props = props;
    }

    pub fn position(&self) -> SliderPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Feed one host event through the state machine
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::MouseDown { client_x } => self.start_drag(client_x),
            PointerEvent::TouchStart { touches } => {
                if let Some(&client_x) = touches.first() {
                    self.start_drag(client_x);
                }
            }
            PointerEvent::MouseMove { client_x } => self.drag_to(client_x),
            PointerEvent::TouchMove { touches } => {
                if let Some(&client_x) = touches.first() {
                    self.drag_to(client_x);
                }
            }
            PointerEvent::MouseUp | PointerEvent::TouchEnd => self.end_drag(),
        }
    }

    /// Size observer callback
    pub fn on_resize(&mut self, width: f64) {
        self.container_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
    }

    pub fn layout(&self) -> SliderLayout {
        let percent = self.position.percent();
        let before_image_width = if self.container_width > 0.0 {
            ImageWidth::Pixels(self.container_width)
        } else {
            ImageWidth::Fill
        };

        SliderLayout {
            before_image: self.props.before_image.clone(),
            after_image: self.props.after_image.clone(),
            before_alt: self.props.before_alt.clone(),
            after_alt: self.props.after_alt.clone(),
            clip_percent: percent,
            handle_left_percent: percent,
            before_image_width,
            before_label: visible_label(&self.props.before_label),
            after_label: visible_label(&self.props.after_label),
            class_name: self.props.class_name.clone(),
            dragging: self.is_dragging(),
        }
    }

    /// Release every host registration; safe to call more than once
    pub fn teardown(&mut self) {
        self.end_drag();
        if let Some(observer) = self.observer.take() {
            self.host.disconnect_size(observer);
        }
    }

    fn start_drag(&mut self, client_x: f64) {
        if let DragState::Idle = self.drag {
            let listener = self.host.subscribe_pointer();
            trace!("slider drag started (listener {})", listener.id());
            self.drag = DragState::Dragging { listener };
        }
        self.move_boundary(client_x);
    }

    fn drag_to(&mut self, client_x: f64) {
        if self.drag.is_dragging() {
            self.move_boundary(client_x);
        }
    }

    fn end_drag(&mut self) {
        if let DragState::Dragging { listener } = std::mem::take(&mut self.drag) {
            trace!("slider drag ended (listener {})", listener.id());
            self.host.unsubscribe_pointer(listener);
        }
    }

    fn move_boundary(&mut self, client_x: f64) {
        self.position = self.host.container_bounds().percentage_at(client_x);
    }
}

impl<H: SliderHost> Drop for ComparisonSlider<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn visible_label(label: &Option<String>) -> Option<String> {
    label.as_ref().filter(|l| !l.is_empty()).cloned()
}
