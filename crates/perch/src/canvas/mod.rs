//! Host canvases.
//!
//! A popup never draws itself into a window directly. It asks a
//! [`HostCanvas`] how big the drawing area is, which theme applies, and to
//! put its id on (or take it off) the canvas's overlay stack.
//! [`Canvas`] is the stock implementation.

mod overlay;

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use perch_core::logging::targets;
use perch_core::{Object, ObjectBase, ObjectId, Signal};
use perch_render::Size;
use perch_style::{ThemeHandle, ThemeProvider};

pub use overlay::OverlayStack;

/// The surface popups float over.
///
/// `add_overlay` and `remove_overlay` must be idempotent and report whether
/// they changed anything.
pub trait HostCanvas: Send + Sync {
    /// Current drawable size.
    fn size(&self) -> Size;

    /// Register an overlay on top of the stack.
    fn add_overlay(&self, id: ObjectId) -> bool;

    /// Deregister an overlay.
    fn remove_overlay(&self, id: ObjectId) -> bool;

    /// The theme overlays on this canvas are styled with.
    fn theme(&self) -> Arc<dyn ThemeProvider>;
}

/// A canvas with an overlay stack and a theme.
pub struct Canvas {
    base: ObjectBase,
    size: RwLock<Size>,
    overlays: Mutex<OverlayStack>,
    theme: Arc<dyn ThemeProvider>,

    /// Emitted with the new size after [`resize`](Self::resize) changes it.
    pub resized: Signal<Size>,
}

impl Canvas {
    /// Create a canvas styled with a default [`ThemeHandle`].
    pub fn new(size: Size) -> Self {
        Self::with_theme(size, ThemeHandle::default())
    }

    /// Create a canvas styled by `theme`.
    ///
    /// Pass a [`ThemeHandle`] clone to keep the ability to swap themes later.
    pub fn with_theme(size: Size, theme: impl ThemeProvider + 'static) -> Self {
        let canvas = Self {
            base: ObjectBase::new::<Self>(),
            size: RwLock::new(size.non_negative()),
            overlays: Mutex::new(OverlayStack::new()),
            theme: Arc::new(theme),
            resized: Signal::new(),
        };
        tracing::debug!(
            target: targets::CANVAS,
            id = ?canvas.base.id(),
            width = size.width,
            height = size.height,
            "canvas created"
        );
        canvas
    }

    /// Change the drawable size.
    pub fn resize(&self, size: Size) {
        let size = size.non_negative();
        {
            let mut current = self.size.write();
            if *current == size {
                return;
            }
            *current = size;
        }
        tracing::debug!(target: targets::CANVAS, width = size.width, height = size.height, "canvas resized");
        self.resized.emit(size);
    }

    /// Check whether `id` is on the overlay stack.
    pub fn has_overlay(&self, id: ObjectId) -> bool {
        self.overlays.lock().contains(id)
    }

    /// The topmost overlay.
    pub fn top_overlay(&self) -> Option<ObjectId> {
        self.overlays.lock().top()
    }

    /// Number of registered overlays.
    pub fn overlay_count(&self) -> usize {
        self.overlays.lock().len()
    }

    /// Snapshot of the overlay ids, bottom first.
    pub fn overlays(&self) -> Vec<ObjectId> {
        self.overlays.lock().ids().to_vec()
    }
}

impl Object for Canvas {
    fn object_id(&self) -> ObjectId {
        self.base.id()
    }
}

impl HostCanvas for Canvas {
    fn size(&self) -> Size {
        *self.size.read()
    }

    fn add_overlay(&self, id: ObjectId) -> bool {
        self.overlays.lock().add(id)
    }

    fn remove_overlay(&self, id: ObjectId) -> bool {
        self.overlays.lock().remove(id)
    }

    fn theme(&self) -> Arc<dyn ThemeProvider> {
        self.theme.clone()
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("id", &self.base.id())
            .field("size", &*self.size.read())
            .field("overlays", &*self.overlays.lock())
            .finish()
    }
}

static_assertions::assert_impl_all!(Canvas: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use perch_style::Theme;

    use super::*;

    #[test]
    fn test_resize_emits_once_per_change() {
        let canvas = Canvas::new(Size::new(100.0, 100.0));
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        canvas.resized.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        canvas.resize(Size::new(200.0, 150.0));
        canvas.resize(Size::new(200.0, 150.0));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(canvas.size(), Size::new(200.0, 150.0));
    }

    #[test]
    fn test_negative_size_clamps() {
        let canvas = Canvas::new(Size::new(-5.0, 20.0));
        assert_eq!(canvas.size(), Size::new(0.0, 20.0));
    }

    #[test]
    fn test_theme_is_shared_live() {
        let handle = ThemeHandle::new(Theme::light());
        let canvas = Canvas::with_theme(Size::new(10.0, 10.0), handle.clone());

        handle.set_theme(Theme::light().with_padding(12.0));
        assert_eq!(canvas.theme().padding(), 12.0);
    }

    #[test]
    fn test_overlay_registration() {
        let canvas = Canvas::new(Size::new(10.0, 10.0));
        let other = Canvas::new(Size::new(1.0, 1.0));
        let id = other.object_id();

        assert!(canvas.add_overlay(id));
        assert!(!canvas.add_overlay(id));
        assert!(canvas.has_overlay(id));
        assert_eq!(canvas.top_overlay(), Some(id));
        assert_eq!(canvas.overlays(), vec![id]);

        assert!(canvas.remove_overlay(id));
        assert!(!canvas.remove_overlay(id));
        assert_eq!(canvas.overlay_count(), 0);
    }
}
