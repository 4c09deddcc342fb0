//! The core widget trait.

use perch_core::Object;
use perch_render::{Point, Rect, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// The base trait for all Perch widgets.
///
/// Only [`widget_base`](Self::widget_base),
/// [`widget_base_mut`](Self::widget_base_mut) and
/// [`min_size`](Self::min_size) are required. Everything else has a default
/// that delegates to the [`WidgetBase`]; widgets with their own placement
/// rules override `move_to` and `resize`.
pub trait Widget: Object + Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The smallest size the widget can be laid out at.
    fn min_size(&self) -> Size;

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Get the widget's position.
    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Move the widget.
    fn move_to(&mut self, pos: Point) {
        self.widget_base_mut().set_pos(pos);
    }

    /// Resize the widget.
    fn resize(&mut self, size: Size) {
        self.widget_base_mut().set_size(size);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Show the widget.
    fn show(&mut self) {
        self.widget_base_mut().show();
    }

    /// Hide the widget.
    fn hide(&mut self) {
        self.widget_base_mut().hide();
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Bring the widget's visuals up to date with its state.
    fn refresh(&mut self) {
        self.widget_base_mut().clear_repaint_flag();
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event.
    ///
    /// Return `true` if the event was handled and should not propagate
    /// further. The default handles nothing.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }
}
