//! Widget base implementation.
//!
//! [`WidgetBase`] carries the state every widget shares: object identity,
//! geometry, visibility and the dirty flag that defers layout until the next
//! refresh.

use perch_core::{Object, ObjectBase, ObjectId, Signal};
use perch_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// Widgets embed this as a field and hand it out through
/// [`Widget::widget_base`](super::Widget::widget_base).
///
/// ```
/// use perch::widget::{Widget, WidgetBase};
/// use perch::{Object, ObjectId};
/// use perch::render::Size;
///
/// struct Spacer {
///     base: WidgetBase,
/// }
///
/// impl Object for Spacer {
///     fn object_id(&self) -> ObjectId {
///         self.base.object_id()
///     }
/// }
///
/// impl Widget for Spacer {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn min_size(&self) -> Size { Size::new(8.0, 8.0) }
/// }
///
/// let mut spacer = Spacer { base: WidgetBase::new::<Spacer>() };
/// spacer.hide();
/// assert!(!spacer.is_visible());
/// ```
pub struct WidgetBase {
    object_base: ObjectBase,

    /// Position relative to the canvas origin, and size.
    geometry: Rect,

    visible: bool,

    /// Set whenever something that affects layout changes; cleared by refresh.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new, visible widget base.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            visible: true,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
        }
    }

    /// Create a widget base that starts out hidden.
    pub fn new_hidden<T: Object + 'static>() -> Self {
        Self {
            visible: false,
            ..Self::new::<T>()
        }
    }

    // =========================================================================
    // Object System Delegation
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` and marks the widget dirty if the geometry
    /// actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's position.
    pub fn set_pos(&mut self, pos: Point) {
        self.set_geometry(Rect::from_origin_size(pos, self.geometry.size));
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        self.set_geometry(Rect::from_origin_size(self.geometry.origin, size));
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set visibility, emitting `visible_changed` on change.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check whether the widget must be laid out again before it is painted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Schedule a relayout and repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Mark the widget as up to date. Called once a refresh has run.
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.object_id())
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("needs_repaint", &self.needs_repaint)
            .finish()
    }
}
