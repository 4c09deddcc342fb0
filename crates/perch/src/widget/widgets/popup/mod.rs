//! Floating overlay popups.
//!
//! A [`PopUp`] wraps one content object and floats it above a
//! [`HostCanvas`]. There are two flavors:
//!
//! - **Plain** popups sit at a requested position, nudged back onto the
//!   canvas when they would overflow, and cast a drop shadow. A tap anywhere
//!   on the popup's area dismisses them.
//! - **Modal** popups ignore positioning, stay centered, tint the canvas
//!   behind them and swallow taps. Only [`hide`](Widget::hide) closes them.
//!
//! Padding and colors come from the canvas theme and are re-read on every
//! refresh.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use perch::prelude::*;
//!
//! let canvas = Arc::new(Canvas::new(Size::new(1000.0, 800.0)));
//! let content: SharedObject = shared(Rectangle::default());
//!
//! let mut dialog = PopUp::new_modal(content, canvas.clone());
//! dialog.move_to(Point::new(5.0, 5.0)); // ignored, modal popups stay centered
//! dialog.tapped(&PointEvent::new(Point::new(5.0, 5.0))); // swallowed
//! assert!(dialog.is_shown());
//!
//! dialog.hide();
//! assert_eq!(canvas.overlay_count(), 0);
//! ```
//!
//! # Layout timing
//!
//! `move_to` and `resize` only record the request and mark the popup dirty.
//! The new geometry is applied by the next [`refresh`](Widget::refresh) or
//! [`paint`](PopUp::paint). The constructors refresh once, so a new popup is
//! laid out immediately.

mod geometry;
mod renderer;
mod state;

use std::sync::Arc;

use perch_core::logging::targets;
use perch_core::{Object, ObjectId, Signal};
use perch_render::{Color, Point, Rect, Renderer, SharedObject, Size};

use crate::canvas::HostCanvas;
use crate::widget::{PointEvent, Tappable, Widget, WidgetBase, WidgetEvent};

pub use geometry::{
    center_modal, clamp_non_modal, inset_content_rect, outset_background_rect, padded_min_size,
};
pub use renderer::{AppliedLayout, LayoutInputs, ModalRenderer, PlainRenderer, PopUpRenderer, PopUpVisual};
pub use state::{OverlayRegistration, OverlayState};

/// A floating overlay holding a single content object.
pub struct PopUp {
    base: WidgetBase,
    content: SharedObject,
    canvas: Arc<dyn HostCanvas>,

    /// Top-left the caller asked for. Unused by modal popups.
    requested_position: Point,
    /// Area the caller asked for, padding included.
    requested_size: Size,

    modal: bool,
    registration: OverlayRegistration,
    renderer: PopUpRenderer,

    /// Emitted before the popup is put on the overlay stack.
    pub about_to_show: Signal<()>,
    /// Emitted before the popup is taken off the overlay stack.
    pub about_to_hide: Signal<()>,
    /// Emitted with the tap that dismissed a plain popup, before it hides.
    pub dismissed: Signal<PointEvent>,
}

impl PopUp {
    fn build(content: SharedObject, canvas: Arc<dyn HostCanvas>, modal: bool) -> Self {
        Self {
            base: WidgetBase::new_hidden::<Self>(),
            content,
            canvas,
            requested_position: Point::ZERO,
            requested_size: Size::ZERO,
            modal,
            registration: OverlayRegistration::new(),
            renderer: PopUpRenderer::new(modal),
            about_to_show: Signal::new(),
            about_to_hide: Signal::new(),
            dismissed: Signal::new(),
        }
    }

    /// Create and show a plain popup with its top-left at `position`.
    ///
    /// The popup is sized to fit its content plus padding.
    pub fn new_at_position(
        content: SharedObject,
        canvas: Arc<dyn HostCanvas>,
        position: Point,
    ) -> Self {
        let mut popup = Self::build(content, canvas, false);
        popup.move_to(position);
        popup.open();
        popup
    }

    /// Create and show a plain popup at the canvas origin.
    pub fn new(content: SharedObject, canvas: Arc<dyn HostCanvas>) -> Self {
        Self::new_at_position(content, canvas, Point::ZERO)
    }

    /// Create and show a modal popup centered on the canvas.
    pub fn new_modal(content: SharedObject, canvas: Arc<dyn HostCanvas>) -> Self {
        let mut popup = Self::build(content, canvas, true);
        popup.open();
        popup
    }

    fn open(&mut self) {
        let min = self.min_size();
        self.resize(min);
        self.show();
        self.refresh();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The content object.
    pub fn content(&self) -> &SharedObject {
        &self.content
    }

    /// The canvas this popup floats over.
    pub fn canvas(&self) -> &Arc<dyn HostCanvas> {
        &self.canvas
    }

    /// Check whether this popup is modal.
    pub fn is_modal(&self) -> bool {
        self.modal
    }

    /// Check whether the popup is on the overlay stack.
    pub fn is_shown(&self) -> bool {
        self.registration.is_shown()
    }

    /// Overlay registration state.
    pub fn overlay_state(&self) -> OverlayState {
        self.registration.state()
    }

    /// The position last passed to [`move_to`](Widget::move_to).
    pub fn requested_position(&self) -> Point {
        self.requested_position
    }

    /// The size last passed to [`resize`](Widget::resize).
    pub fn requested_size(&self) -> Size {
        self.requested_size
    }

    /// Check whether a move or resize is waiting for the next refresh.
    pub fn needs_layout(&self) -> bool {
        self.base.needs_repaint()
    }

    /// Where the content was placed by the last layout.
    pub fn content_rect(&self) -> Option<Rect> {
        self.renderer.content_rect()
    }

    /// Where the background was placed by the last layout.
    pub fn background_rect(&self) -> Option<Rect> {
        self.renderer.background_rect()
    }

    /// Color painted over the whole canvas behind the popup.
    pub fn backdrop_color(&self) -> Color {
        self.renderer.backdrop_color()
    }

    /// The active renderer.
    pub fn renderer(&self) -> &PopUpRenderer {
        &self.renderer
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Move a plain popup, then show it.
    pub fn show_at_position(&mut self, position: Point) {
        self.move_to(position);
        self.show();
    }

    /// Refresh if dirty, then paint the backdrop and decorations.
    ///
    /// Hidden popups paint nothing.
    pub fn paint(&mut self, renderer: &mut dyn Renderer) {
        if !self.is_shown() {
            return;
        }
        if self.needs_layout() {
            self.refresh();
        }
        self.renderer.paint(self.base.size(), renderer);
    }

    fn layout_inputs(&self, padding: f32) -> LayoutInputs {
        LayoutInputs {
            canvas_size: self.canvas.size(),
            requested_position: self.requested_position,
            requested_size: self.requested_size,
            content_min_size: self.content.lock().min_size(),
            padding,
        }
    }

    fn dismiss(&mut self, event: &PointEvent) {
        if self.modal {
            tracing::trace!(target: targets::POPUP, id = ?self.object_id(), "tap swallowed by modal popup");
            return;
        }
        if !self.is_shown() {
            return;
        }
        tracing::debug!(
            target: targets::POPUP,
            id = ?self.object_id(),
            x = event.absolute_position.x,
            y = event.absolute_position.y,
            "popup dismissed by tap"
        );
        self.dismissed.emit(*event);
        self.hide();
    }
}

impl Object for PopUp {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PopUp {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn min_size(&self) -> Size {
        let padding = self.canvas.theme().padding();
        let content_min = self.content.lock().min_size();
        self.renderer.min_size(content_min, padding)
    }

    /// Record a new position for a plain popup. Modal popups ignore this.
    fn move_to(&mut self, pos: Point) {
        if self.modal {
            tracing::trace!(target: targets::POPUP, id = ?self.object_id(), "move ignored on modal popup");
            return;
        }
        self.requested_position = pos;
        self.base.update();
    }

    /// Record a new requested size. The popup itself always covers the
    /// whole canvas.
    fn resize(&mut self, size: Size) {
        self.requested_size = size;
        let canvas_size = self.canvas.size();
        self.base.set_size(canvas_size);
        self.base.update();
    }

    fn show(&mut self) {
        if self.is_shown() {
            tracing::trace!(target: targets::POPUP, id = ?self.object_id(), "show ignored, already shown");
            return;
        }
        self.about_to_show.emit(());
        let id = self.object_id();
        self.registration.show(id, self.canvas.as_ref());
        self.base.show();
    }

    fn hide(&mut self) {
        if !self.is_shown() {
            tracing::trace!(target: targets::POPUP, id = ?self.object_id(), "hide ignored, already hidden");
            return;
        }
        self.about_to_hide.emit(());
        let id = self.object_id();
        self.registration.hide(id, self.canvas.as_ref());
        self.base.hide();
    }

    /// Re-read the theme and lay out again if anything drifted since the
    /// last layout, including the canvas size.
    fn refresh(&mut self) {
        let theme = self.canvas.theme();
        let inputs = self.layout_inputs(theme.padding());
        self.base.set_size(inputs.canvas_size);
        self.renderer.refresh(&inputs, &self.content, theme.as_ref());
        self.base.clear_repaint_flag();
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Tapped(e) => self.tapped(e),
            WidgetEvent::TappedSecondary(e) => self.tapped_secondary(e),
        }
        // Plain popups consume the tap that dismisses them and modal ones
        // swallow every tap, so nothing underneath ever sees it.
        event.accept();
        true
    }
}

impl Tappable for PopUp {
    fn tapped(&mut self, event: &PointEvent) {
        self.dismiss(event);
    }

    fn tapped_secondary(&mut self, event: &PointEvent) {
        self.dismiss(event);
    }
}

impl Drop for PopUp {
    fn drop(&mut self) {
        let id = self.object_id();
        if self.registration.hide(id, self.canvas.as_ref()) {
            tracing::debug!(target: targets::POPUP, ?id, "shown popup dropped, overlay released");
        }
        self.renderer.destroy();
    }
}

impl std::fmt::Debug for PopUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopUp")
            .field("id", &self.object_id())
            .field("modal", &self.modal)
            .field("state", &self.registration.state())
            .field("requested_position", &self.requested_position)
            .field("requested_size", &self.requested_size)
            .field("renderer", &self.renderer)
            .finish()
    }
}

static_assertions::assert_impl_all!(PopUp: Send, Sync);
