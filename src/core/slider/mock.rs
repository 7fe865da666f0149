//! Recording host used by the slider unit tests

use super::geometry::ContainerBounds;
use super::host::{FullscreenError, FullscreenHost, ListenerHandle, ObserverHandle, SliderHost};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Default)]
struct State {
    bounds: ContainerBounds,
    next_id: u64,
    pointer: HashSet<u64>,
    observers: HashSet<u64>,
    fullscreen_listeners: HashSet<u64>,
    pointer_subscriptions: usize,
    pointer_unsubscriptions: usize,
    observer_disconnects: usize,
    fullscreen: bool,
    deny_fullscreen: bool,
}

/// Cloning shares the recorded state, so a test can keep a probe after
/// handing the host to a slider.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Rc<RefCell<State>>,
}

impl MockHost {
    pub fn new(bounds: ContainerBounds) -> Self {
        let host = Self::default();
        host.state.borrow_mut().bounds = bounds;
        host
    }

    fn next_id(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }

    pub fn active_pointer_listeners(&self) -> usize {
        self.state.borrow().pointer.len()
    }

    pub fn active_observers(&self) -> usize {
        self.state.borrow().observers.len()
    }

    pub fn active_fullscreen_listeners(&self) -> usize {
        self.state.borrow().fullscreen_listeners.len()
    }

    pub fn pointer_subscriptions(&self) -> usize {
        self.state.borrow().pointer_subscriptions
    }

    pub fn pointer_unsubscriptions(&self) -> usize {
        self.state.borrow().pointer_unsubscriptions
    }

    pub fn observer_disconnects(&self) -> usize {
        self.state.borrow().observer_disconnects
    }

    /// Simulate the user leaving fullscreen with Escape
    pub fn leave_fullscreen_externally(&self) {
        self.state.borrow_mut().fullscreen = false;
    }

    pub fn deny_fullscreen(&self) {
        self.state.borrow_mut().deny_fullscreen = true;
    }
}

impl SliderHost for MockHost {
    fn container_bounds(&self) -> ContainerBounds {
        self.state.borrow().bounds
    }

    fn subscribe_pointer(&mut self) -> ListenerHandle {
        let id = self.next_id();
        let mut state = self.state.borrow_mut();
        state.pointer.insert(id);
        state.pointer_subscriptions += 1;
        ListenerHandle::new(id)
    }

    fn unsubscribe_pointer(&mut self, handle: ListenerHandle) {
        let mut state = self.state.borrow_mut();
        state.pointer.remove(&handle.id());
        state.pointer_unsubscriptions += 1;
    }

    fn observe_size(&mut self) -> ObserverHandle {
        let id = self.next_id();
        self.state.borrow_mut().observers.insert(id);
        ObserverHandle::new(id)
    }

    fn disconnect_size(&mut self, handle: ObserverHandle) {
        let mut state = self.state.borrow_mut();
        state.observers.remove(&handle.id());
        state.observer_disconnects += 1;
    }
}

impl FullscreenHost for MockHost {
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        let mut state = self.state.borrow_mut();
        if state.deny_fullscreen {
            return Err(FullscreenError::Denied("permission check failed".to_string()));
        }
        state.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.state.borrow_mut().fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.state.borrow().fullscreen
    }

    fn subscribe_fullscreen_change(&mut self) -> ListenerHandle {
        let id = self.next_id();
        self.state.borrow_mut().fullscreen_listeners.insert(id);
        ListenerHandle::new(id)
    }

    fn unsubscribe_fullscreen_change(&mut self, handle: ListenerHandle) {
        self.state
            .borrow_mut()
            .fullscreen_listeners
            .remove(&handle.id());
    }
}
