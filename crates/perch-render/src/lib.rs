//! Geometry, color and decoration primitives for Perch.
//!
//! This crate holds the value types every layer of Perch speaks in, plus the
//! small set of visuals a popup decorates itself with.
//!
//! - [`Point`], [`Size`], [`Rect`] and [`Color`]: canvas-space value types
//! - [`CanvasObject`]: the narrow interface popups use to place content
//! - [`Rectangle`] and [`Shadow`]: leaf decoration visuals
//! - [`Renderer`]: the drawing surface decorations are composited onto, with
//!   [`RecordingRenderer`] capturing [`DrawCommand`]s
//!
//! # Example
//!
//! ```
//! use perch_render::{Color, Point, Rect, Size};
//!
//! let outer = Rect::from_origin_size(Point::new(10.0, 10.0), Size::new(100.0, 60.0));
//! let inner = outer.deflate(8.0);
//! assert_eq!(inner, Rect::new(18.0, 18.0, 84.0, 44.0));
//! assert_eq!(Color::TRANSPARENT.a, 0.0);
//! ```

mod object;
mod primitives;
mod renderer;
mod types;

pub use object::{shared, CanvasObject, SharedObject};
pub use primitives::{Rectangle, Shadow, ShadowKind};
pub use renderer::{DrawCommand, RecordingRenderer, Renderer};
pub use types::{Color, Point, Rect, Size};
