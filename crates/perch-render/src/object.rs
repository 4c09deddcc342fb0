//! The interface popups use to place visuals on a canvas.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::{Point, Rect, Size};

/// A visual element that can be positioned and sized on a host canvas.
///
/// Positions are absolute canvas coordinates. Implementations report the
/// smallest size they can be laid out at through [`min_size`](Self::min_size).
pub trait CanvasObject: Send + Sync {
    /// The smallest size this object can be displayed at.
    fn min_size(&self) -> Size;

    /// Current top-left position.
    fn position(&self) -> Point;

    /// Current size.
    fn size(&self) -> Size;

    /// Move the object so its top-left corner is at `pos`.
    fn move_to(&mut self, pos: Point);

    /// Resize the object.
    fn resize(&mut self, size: Size);

    /// Current bounds as a rectangle.
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    /// Apply both position and size from a rectangle.
    fn set_bounds(&mut self, rect: Rect) {
        self.move_to(rect.origin);
        self.resize(rect.size);
    }
}

/// A canvas object shared between its owner and whoever lays it out.
pub type SharedObject = Arc<Mutex<dyn CanvasObject>>;

/// Wrap an object for sharing.
///
/// The typed handle is returned so the owner keeps concrete access; clone it
/// into a [`SharedObject`] where a type-erased handle is needed.
///
/// ```
/// use perch_render::{shared, CanvasObject, Rectangle, SharedObject};
///
/// let rect = shared(Rectangle::default());
/// let erased: SharedObject = rect.clone();
/// assert_eq!(erased.lock().position(), rect.lock().position());
/// ```
pub fn shared<T: CanvasObject + 'static>(object: T) -> Arc<Mutex<T>> {
    Arc::new(Mutex::new(object))
}
