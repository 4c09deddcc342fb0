//! Overlay registration state.

use perch_core::logging::targets;
use perch_core::ObjectId;

use crate::canvas::HostCanvas;

/// Whether a popup is on its canvas's overlay stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Not registered. The initial state.
    #[default]
    Hidden,
    /// Registered and visible.
    Shown,
}

/// Tracks a popup's overlay registration and keeps the canvas in step.
///
/// Both transitions are idempotent: showing a shown popup or hiding a hidden
/// one leaves the canvas untouched and returns `false`.
#[derive(Debug, Default)]
pub struct OverlayRegistration {
    state: OverlayState,
}

impl OverlayRegistration {
    /// Start out hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Check if the popup is registered.
    pub fn is_shown(&self) -> bool {
        self.state == OverlayState::Shown
    }

    /// Register `id` with `canvas`. Returns `true` on a Hidden to Shown
    /// transition.
    pub fn show(&mut self, id: ObjectId, canvas: &dyn HostCanvas) -> bool {
        if self.is_shown() {
            tracing::trace!(target: targets::POPUP, ?id, "show ignored, already shown");
            return false;
        }
        if !canvas.add_overlay(id) {
            tracing::trace!(target: targets::POPUP, ?id, "canvas already held overlay");
        }
        self.state = OverlayState::Shown;
        tracing::debug!(target: targets::POPUP, ?id, "popup shown");
        true
    }

    /// Deregister `id` from `canvas`. Returns `true` on a Shown to Hidden
    /// transition.
    pub fn hide(&mut self, id: ObjectId, canvas: &dyn HostCanvas) -> bool {
        if !self.is_shown() {
            tracing::trace!(target: targets::POPUP, ?id, "hide ignored, already hidden");
            return false;
        }
        if !canvas.remove_overlay(id) {
            tracing::trace!(target: targets::POPUP, ?id, "canvas no longer held overlay");
        }
        self.state = OverlayState::Hidden;
        tracing::debug!(target: targets::POPUP, ?id, "popup hidden");
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use perch_core::ObjectBase;
    use perch_render::Size;
    use perch_style::{Theme, ThemeProvider};

    use super::*;

    /// Canvas double that counts every add and remove it receives.
    #[derive(Default)]
    struct CountingCanvas {
        calls: Mutex<Vec<(&'static str, ObjectId)>>,
    }

    impl HostCanvas for CountingCanvas {
        fn size(&self) -> Size {
            Size::new(100.0, 100.0)
        }

        fn add_overlay(&self, id: ObjectId) -> bool {
            self.calls.lock().push(("add", id));
            true
        }

        fn remove_overlay(&self, id: ObjectId) -> bool {
            self.calls.lock().push(("remove", id));
            true
        }

        fn theme(&self) -> Arc<dyn ThemeProvider> {
            Arc::new(Theme::default())
        }
    }

    struct Marker;

    #[test]
    fn test_starts_hidden() {
        let registration = OverlayRegistration::new();
        assert_eq!(registration.state(), OverlayState::Hidden);
        assert!(!registration.is_shown());
    }

    #[test]
    fn test_show_hide_idempotent() {
        let canvas = CountingCanvas::default();
        let object = ObjectBase::new::<Marker>();
        let id = object.id();
        let mut registration = OverlayRegistration::new();

        assert!(registration.show(id, &canvas));
        assert!(!registration.show(id, &canvas));
        assert!(registration.hide(id, &canvas));
        assert!(!registration.hide(id, &canvas));

        assert_eq!(*canvas.calls.lock(), vec![("add", id), ("remove", id)]);
    }
}
