//! Host capabilities the slider needs from its environment
//!
//! A browser binding implements these over `window` listeners,
//! `ResizeObserver` and the Fullscreen API; tests implement them over
//! plain counters.

use super::geometry::ContainerBounds;
use thiserror::Error;

/// Registration of a set of global listeners
///
/// Not `Clone`: releasing a handle consumes it, so a registration can only be
/// released once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Registration of a container size observer
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

impl ObserverHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What the comparison slider needs from its host
pub trait SliderHost {
    /// Current on-screen bounds of the container
    fn container_bounds(&self) -> ContainerBounds;

    /// Start delivering global pointer-move/up and touch-move/end events
    fn subscribe_pointer(&mut self) -> ListenerHandle;

    /// Stop delivering the events registered under `handle`
    fn unsubscribe_pointer(&mut self, handle: ListenerHandle);

    /// Start reporting container width changes
    fn observe_size(&mut self) -> ObserverHandle;

    fn disconnect_size(&mut self, handle: ObserverHandle);
}

/// Failure reported by the host's fullscreen implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    #[error("Fullscreen is not supported by this host")]
    Unsupported,

    #[error("Fullscreen request denied: {0}")]
    Denied(String),
}

/// Additional capabilities of hosts that can present the container fullscreen
pub trait FullscreenHost: SliderHost {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Whether any element is currently fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Start delivering fullscreen-change notifications
    fn subscribe_fullscreen_change(&mut self) -> ListenerHandle;

    fn unsubscribe_fullscreen_change(&mut self, handle: ListenerHandle);
}
