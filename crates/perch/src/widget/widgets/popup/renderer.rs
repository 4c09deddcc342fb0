//! The popup's two renderers.
//!
//! A plain popup draws a drop shadow and a background around its content at
//! the clamped requested position. A modal popup draws only a background,
//! centered, and tints the whole canvas behind it.
//!
//! Renderers keep the inputs of their last layout and only lay out again
//! when those inputs change, so refreshing an unchanged popup is cheap.

use perch_core::logging::{span_names, targets};
use perch_render::{
    CanvasObject, Color, Point, Rect, Rectangle, Renderer, Shadow, ShadowKind, SharedObject, Size,
};
use perch_style::ThemeProvider;

use super::geometry;

/// Everything a layout pass depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInputs {
    /// Drawable size of the host canvas. The popup occupies all of it.
    pub canvas_size: Size,
    /// Where the caller asked a plain popup to go.
    pub requested_position: Point,
    /// The area the caller asked for, padding included.
    pub requested_size: Size,
    /// The content's own minimum size.
    pub content_min_size: Size,
    /// Theme padding.
    pub padding: f32,
}

/// Result of the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedLayout {
    /// The inputs the layout was computed from.
    pub inputs: LayoutInputs,
    /// Where the content was placed.
    pub content: Rect,
    /// Where the background was placed.
    pub background: Rect,
}

/// A visual listed by [`PopUpRenderer::objects`], bottom first.
#[derive(Clone, Copy)]
pub enum PopUpVisual<'a> {
    /// The drop shadow of a plain popup.
    Shadow(&'a Shadow),
    /// The background rectangle.
    Background(&'a Rectangle),
    /// The caller's content.
    Content(&'a SharedObject),
}

impl std::fmt::Debug for PopUpVisual<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shadow(shadow) => f.debug_tuple("Shadow").field(shadow).finish(),
            Self::Background(bg) => f.debug_tuple("Background").field(bg).finish(),
            Self::Content(content) => f.debug_tuple("Content").field(&content.lock().bounds()).finish(),
        }
    }
}

/// Renderer for non-modal popups.
#[derive(Debug)]
pub struct PlainRenderer {
    shadow: Shadow,
    background: Rectangle,
    applied: Option<AppliedLayout>,
}

impl PlainRenderer {
    fn new() -> Self {
        Self {
            shadow: Shadow::new(ShadowKind::Around, 0.0, Color::TRANSPARENT),
            background: Rectangle::default(),
            applied: None,
        }
    }

    fn layout(&mut self, inputs: &LayoutInputs, content: &SharedObject) -> AppliedLayout {
        let outer_size = inputs.requested_size.non_negative();
        let outer_pos =
            geometry::clamp_non_modal(inputs.canvas_size, inputs.requested_position, outer_size);
        let outer = Rect::from_origin_size(outer_pos, outer_size);
        let content_rect = geometry::inset_content_rect(outer_pos, outer_size, inputs.padding);

        content.lock().set_bounds(content_rect);
        self.background.set_bounds(outer);
        self.shadow.set_bounds(outer);
        self.shadow.depth = inputs.padding * 2.0;

        AppliedLayout {
            inputs: *inputs,
            content: content_rect,
            background: outer,
        }
    }

    fn apply_theme(&mut self, theme: &dyn ThemeProvider) {
        self.background.fill_color = theme.background_color();
        self.shadow.color = theme.shadow_color();
    }
}

/// Renderer for modal popups.
#[derive(Debug)]
pub struct ModalRenderer {
    background: Rectangle,
    backdrop: Color,
    applied: Option<AppliedLayout>,
}

impl ModalRenderer {
    fn new() -> Self {
        Self {
            background: Rectangle::default(),
            backdrop: Color::TRANSPARENT,
            applied: None,
        }
    }

    fn layout(&mut self, inputs: &LayoutInputs, content: &SharedObject) -> AppliedLayout {
        let content_rect = geometry::center_modal(
            inputs.canvas_size,
            inputs.requested_size,
            inputs.content_min_size,
            inputs.padding,
        );
        let background = geometry::outset_background_rect(content_rect, inputs.padding);

        content.lock().set_bounds(content_rect);
        self.background.set_bounds(background);

        AppliedLayout {
            inputs: *inputs,
            content: content_rect,
            background,
        }
    }

    fn apply_theme(&mut self, theme: &dyn ThemeProvider) {
        self.background.fill_color = theme.background_color();
        self.backdrop = theme.shadow_color();
    }
}

/// The renderer a popup was built with. Chosen once, never switched.
#[derive(Debug)]
pub enum PopUpRenderer {
    /// Shadowed, positioned popup.
    Plain(PlainRenderer),
    /// Centered popup over a tinted canvas.
    Modal(ModalRenderer),
}

impl PopUpRenderer {
    /// Create the renderer matching a popup's modality.
    pub fn new(modal: bool) -> Self {
        if modal {
            Self::Modal(ModalRenderer::new())
        } else {
            Self::Plain(PlainRenderer::new())
        }
    }

    /// Check if this is the modal renderer.
    pub fn is_modal(&self) -> bool {
        matches!(self, Self::Modal(_))
    }

    /// Content minimum plus padding on every side. Identical for both
    /// renderers.
    pub fn min_size(&self, content_min_size: Size, padding: f32) -> Size {
        geometry::padded_min_size(content_min_size, padding)
    }

    /// Lay out content and decorations unconditionally.
    pub fn layout(&mut self, inputs: &LayoutInputs, content: &SharedObject) {
        let _span = tracing::trace_span!(
            target: targets::POPUP,
            span_names::POPUP_LAYOUT,
            modal = self.is_modal()
        )
        .entered();

        let applied = match self {
            Self::Plain(r) => {
                let applied = r.layout(inputs, content);
                r.applied = Some(applied);
                applied
            }
            Self::Modal(r) => {
                let applied = r.layout(inputs, content);
                r.applied = Some(applied);
                applied
            }
        };
        tracing::trace!(
            target: targets::POPUP,
            content = ?applied.content,
            background = ?applied.background,
            "popup laid out"
        );
    }

    /// Check whether the last layout was computed from different inputs.
    pub fn is_stale(&self, inputs: &LayoutInputs) -> bool {
        self.applied().is_none_or(|applied| applied.inputs != *inputs)
    }

    /// Re-read theme colors, and lay out again if the inputs drifted.
    ///
    /// Returns `true` if a layout pass ran.
    pub fn refresh(
        &mut self,
        inputs: &LayoutInputs,
        content: &SharedObject,
        theme: &dyn ThemeProvider,
    ) -> bool {
        match self {
            Self::Plain(r) => r.apply_theme(theme),
            Self::Modal(r) => r.apply_theme(theme),
        }
        if !self.is_stale(inputs) {
            tracing::trace!(target: targets::POPUP, "layout up to date");
            return false;
        }
        self.layout(inputs, content);
        true
    }

    /// The last applied layout, if any.
    pub fn applied(&self) -> Option<&AppliedLayout> {
        match self {
            Self::Plain(r) => r.applied.as_ref(),
            Self::Modal(r) => r.applied.as_ref(),
        }
    }

    /// Where the content was last placed.
    pub fn content_rect(&self) -> Option<Rect> {
        self.applied().map(|applied| applied.content)
    }

    /// Where the background was last placed.
    pub fn background_rect(&self) -> Option<Rect> {
        self.applied().map(|applied| applied.background)
    }

    /// Color painted over the whole canvas behind the popup.
    pub fn backdrop_color(&self) -> Color {
        match self {
            Self::Plain(_) => Color::TRANSPARENT,
            Self::Modal(r) => r.backdrop,
        }
    }

    /// The popup's visuals in paint order, content last.
    pub fn objects<'a>(&'a self, content: &'a SharedObject) -> Vec<PopUpVisual<'a>> {
        match self {
            Self::Plain(r) => vec![
                PopUpVisual::Shadow(&r.shadow),
                PopUpVisual::Background(&r.background),
                PopUpVisual::Content(content),
            ],
            Self::Modal(r) => vec![
                PopUpVisual::Background(&r.background),
                PopUpVisual::Content(content),
            ],
        }
    }

    /// Paint the backdrop and decorations. Content is painted by its owner.
    pub fn paint(&self, canvas_size: Size, renderer: &mut dyn Renderer) {
        let backdrop = self.backdrop_color();
        if !backdrop.is_transparent() && !canvas_size.is_empty() {
            renderer.fill_rect(Rect::from_size(canvas_size), backdrop);
        }
        match self {
            Self::Plain(r) => {
                r.shadow.paint(renderer);
                r.background.paint(renderer);
            }
            Self::Modal(r) => r.background.paint(renderer),
        }
    }

    /// Release renderer resources. Decorations are plain values, so there is
    /// nothing to free.
    pub fn destroy(&mut self) {
        tracing::trace!(target: targets::POPUP, "renderer destroyed");
    }
}

#[cfg(test)]
mod tests {
    use perch_render::{shared, DrawCommand, RecordingRenderer};
    use perch_style::Theme;

    use super::*;

    fn inputs(canvas: (f32, f32), pos: (f32, f32), requested: (f32, f32), padding: f32) -> LayoutInputs {
        LayoutInputs {
            canvas_size: canvas.into(),
            requested_position: pos.into(),
            requested_size: requested.into(),
            content_min_size: Size::new(20.0, 10.0),
            padding,
        }
    }

    #[test]
    fn test_plain_layout() {
        let content: SharedObject = shared(Rectangle::default());
        let mut renderer = PopUpRenderer::new(false);
        renderer.layout(&inputs((800.0, 600.0), (750.0, 550.0), (216.0, 116.0), 8.0), &content);

        assert_eq!(renderer.background_rect(), Some(Rect::new(584.0, 484.0, 216.0, 116.0)));
        assert_eq!(renderer.content_rect(), Some(Rect::new(592.0, 492.0, 200.0, 100.0)));
        assert_eq!(content.lock().bounds(), Rect::new(592.0, 492.0, 200.0, 100.0));

        let PopUpRenderer::Plain(plain) = &renderer else {
            panic!("expected the plain renderer");
        };
        assert_eq!(plain.shadow.depth, 16.0);
        assert_eq!(plain.shadow.bounds(), plain.background.bounds());
    }

    #[test]
    fn test_refresh_skips_unchanged_inputs() {
        let content: SharedObject = shared(Rectangle::default());
        let theme = Theme::light();
        let mut renderer = PopUpRenderer::new(true);
        let first = inputs((400.0, 300.0), (0.0, 0.0), (100.0, 80.0), 4.0);

        assert!(renderer.refresh(&first, &content, &theme));
        assert!(!renderer.refresh(&first, &content, &theme));

        let moved = LayoutInputs {
            canvas_size: Size::new(500.0, 300.0),
            ..first
        };
        assert!(renderer.is_stale(&moved));
        assert!(renderer.refresh(&moved, &content, &theme));
    }

    #[test]
    fn test_refresh_rereads_theme_colors() {
        let content: SharedObject = shared(Rectangle::default());
        let mut renderer = PopUpRenderer::new(true);
        let layout = inputs((400.0, 300.0), (0.0, 0.0), (100.0, 80.0), 4.0);

        renderer.refresh(&layout, &content, &Theme::light());
        assert_eq!(renderer.backdrop_color(), Theme::light().shadow_color());

        renderer.refresh(&layout, &content, &Theme::dark());
        assert_eq!(renderer.backdrop_color(), Theme::dark().shadow_color());
        let PopUpRenderer::Modal(modal) = &renderer else {
            panic!("expected the modal renderer");
        };
        assert_eq!(modal.background.fill_color, Theme::dark().background_color());
    }

    #[test]
    fn test_objects_order() {
        let content: SharedObject = shared(Rectangle::default());

        let plain = PopUpRenderer::new(false);
        let kinds: Vec<_> = plain
            .objects(&content)
            .iter()
            .map(|visual| match visual {
                PopUpVisual::Shadow(_) => "shadow",
                PopUpVisual::Background(_) => "background",
                PopUpVisual::Content(_) => "content",
            })
            .collect();
        assert_eq!(kinds, ["shadow", "background", "content"]);

        let modal = PopUpRenderer::new(true);
        assert_eq!(modal.objects(&content).len(), 2);
    }

    #[test]
    fn test_plain_paint_has_no_backdrop() {
        let content: SharedObject = shared(Rectangle::default());
        let theme = Theme::light();
        let mut renderer = PopUpRenderer::new(false);
        renderer.refresh(&inputs((300.0, 300.0), (10.0, 10.0), (60.0, 40.0), 4.0), &content, &theme);

        let mut recorder = RecordingRenderer::new();
        renderer.paint(Size::new(300.0, 300.0), &mut recorder);

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::Shadow {
                    rect: Rect::new(10.0, 10.0, 60.0, 40.0),
                    depth: 8.0,
                    color: theme.shadow_color(),
                },
                DrawCommand::FillRect {
                    rect: Rect::new(10.0, 10.0, 60.0, 40.0),
                    color: theme.background_color(),
                },
            ]
        );
    }

    #[test]
    fn test_min_size() {
        let renderer = PopUpRenderer::new(false);
        assert_eq!(
            renderer.min_size(Size::new(10.0, 20.0), 5.0),
            Size::new(20.0, 30.0)
        );
    }
}
