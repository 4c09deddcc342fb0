//! Popup placement math.
//!
//! Everything here is pure: canvas coordinates in, canvas coordinates out.
//! Negative sizes never come out of these functions; they clamp to zero.

use perch_render::{Point, Rect, Size};

/// Shift a non-modal popup so it stays on the canvas.
///
/// Each axis is handled on its own. If the popup's far edge would pass the
/// canvas edge, the origin moves back by the overflow. An origin that ends
/// up negative (the popup is larger than the canvas, or was requested off
/// the top-left) is pinned to zero.
pub fn clamp_non_modal(canvas_size: Size, requested_position: Point, requested_size: Size) -> Point {
    Point::new(
        clamp_axis(requested_position.x, requested_size.width, canvas_size.width),
        clamp_axis(requested_position.y, requested_size.height, canvas_size.height),
    )
}

fn clamp_axis(origin: f32, extent: f32, limit: f32) -> f32 {
    let shifted = if origin + extent > limit {
        limit - extent
    } else {
        origin
    };
    shifted.max(0.0)
}

/// The content area inside an outer rectangle, `padding` in from every edge.
pub fn inset_content_rect(outer_position: Point, outer_size: Size, padding: f32) -> Rect {
    Rect::from_origin_size(
        outer_position.offset_uniform(padding),
        outer_size.shrink(padding * 2.0),
    )
}

/// Center a modal popup's content on the canvas.
///
/// The content gets the requested size minus padding, but never less than
/// its own minimum and never more than the canvas.
pub fn center_modal(
    canvas_size: Size,
    requested_size: Size,
    content_min_size: Size,
    padding: f32,
) -> Rect {
    let size = requested_size
        .shrink(padding * 2.0)
        .max(content_min_size)
        .min(canvas_size)
        .non_negative();
    let position = Point::new(
        (canvas_size.width - size.width) / 2.0,
        (canvas_size.height - size.height) / 2.0,
    );
    Rect::from_origin_size(position, size)
}

/// The background behind a content rectangle: `padding` out on every side.
pub fn outset_background_rect(content: Rect, padding: f32) -> Rect {
    content.inflate(padding)
}

/// Content minimum plus padding on both sides of each axis.
pub fn padded_min_size(content_min_size: Size, padding: f32) -> Size {
    content_min_size.non_negative().expand(padding * 2.0)
}
