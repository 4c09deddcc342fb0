//! Leaf decoration visuals.
//!
//! These are plain value objects: they remember where they were placed and
//! how they should be filled. A [`Renderer`](crate::Renderer) turns them into
//! pixels.

use crate::object::CanvasObject;
use crate::renderer::Renderer;
use crate::types::{Color, Point, Rect, Size};

/// A filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// Fill color.
    pub fill_color: Color,
    position: Point,
    size: Size,
}

impl Rectangle {
    /// Create a rectangle with the given fill color.
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            position: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// Draw this rectangle.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        if self.fill_color.is_transparent() || self.size.is_empty() {
            return;
        }
        renderer.fill_rect(self.bounds(), self.fill_color);
    }
}

impl CanvasObject for Rectangle {
    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn position(&self) -> Point {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn move_to(&mut self, pos: Point) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

/// Which edges a [`Shadow`] is cast from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowKind {
    /// Shadow falls on all four sides.
    #[default]
    Around,
    /// Shadow only below the bottom edge.
    Below,
}

/// A soft drop shadow cast by a rectangular region.
///
/// The shadow's bounds are those of the casting region; `depth` says how far
/// the blur extends beyond them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Edges the shadow is cast from.
    pub kind: ShadowKind,
    /// Blur extent beyond the casting region.
    pub depth: f32,
    /// Shadow tint.
    pub color: Color,
    position: Point,
    size: Size,
}

impl Shadow {
    /// Create a shadow of the given kind and depth.
    pub fn new(kind: ShadowKind, depth: f32, color: Color) -> Self {
        Self {
            kind,
            depth: depth.max(0.0),
            color,
            position: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// The region actually darkened, including the blur.
    pub fn extent(&self) -> Rect {
        let bounds = self.bounds();
        match self.kind {
            ShadowKind::Around => bounds.inflate(self.depth),
            ShadowKind::Below => Rect::new(
                bounds.left(),
                bounds.top(),
                bounds.width(),
                bounds.height() + self.depth,
            ),
        }
    }

    /// Draw this shadow.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        if self.color.is_transparent() || self.size.is_empty() {
            return;
        }
        renderer.draw_shadow(self.bounds(), self.depth, self.color);
    }
}

impl CanvasObject for Shadow {
    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn position(&self) -> Point {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn move_to(&mut self, pos: Point) {
        self.position = pos;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingRenderer};

    #[test]
    fn test_rectangle_bounds() {
        let mut rect = Rectangle::new(Color::WHITE);
        rect.set_bounds(Rect::new(5.0, 6.0, 70.0, 80.0));
        assert_eq!(rect.position(), Point::new(5.0, 6.0));
        assert_eq!(rect.size(), Size::new(70.0, 80.0));
    }

    #[test]
    fn test_transparent_rectangle_draws_nothing() {
        let mut rect = Rectangle::new(Color::TRANSPARENT);
        rect.resize(Size::new(10.0, 10.0));

        let mut renderer = RecordingRenderer::new();
        rect.paint(&mut renderer);
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_shadow_extent() {
        let mut shadow = Shadow::new(ShadowKind::Around, 8.0, Color::BLACK);
        shadow.set_bounds(Rect::new(20.0, 20.0, 100.0, 50.0));
        assert_eq!(shadow.extent(), Rect::new(12.0, 12.0, 116.0, 66.0));

        shadow.kind = ShadowKind::Below;
        assert_eq!(shadow.extent(), Rect::new(20.0, 20.0, 100.0, 58.0));
    }

    #[test]
    fn test_shadow_paint() {
        let mut shadow = Shadow::new(ShadowKind::Around, 4.0, Color::BLACK);
        shadow.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));

        let mut renderer = RecordingRenderer::new();
        shadow.paint(&mut renderer);
        assert_eq!(
            renderer.commands(),
            &[DrawCommand::Shadow {
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                depth: 4.0,
                color: Color::BLACK,
            }]
        );
    }
}
