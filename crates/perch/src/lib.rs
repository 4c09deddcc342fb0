//! Perch: floating overlay popups for retained-mode GUIs.
//!
//! A [`PopUp`](widget::PopUp) floats above a host [`Canvas`](canvas::Canvas),
//! wrapping one content object with padding, a background and (for plain
//! popups) a drop shadow. Modal popups are always centered and cover the
//! whole canvas with the theme's overlay tint, swallowing taps so nothing
//! underneath can be reached.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use perch::prelude::*;
//!
//! let canvas = Arc::new(Canvas::new(Size::new(800.0, 600.0)));
//! let content: SharedObject = shared(Rectangle::default());
//!
//! let mut popup = PopUp::new_at_position(content, canvas.clone(), Point::new(40.0, 40.0));
//! assert!(popup.is_shown());
//! assert!(canvas.has_overlay(popup.object_id()));
//!
//! // A tap on the popup's background dismisses it.
//! popup.tapped(&PointEvent::new(Point::new(5.0, 5.0)));
//! assert!(!popup.is_shown());
//! assert_eq!(canvas.overlay_count(), 0);
//! ```
//!
//! # Crate Layout
//!
//! - [`canvas`]: the host canvas and its overlay stack
//! - [`widget`]: the widget base, events, and the popup itself
//!
//! Object ids and signals from `perch-core` are re-exported at the root.
//! Geometry and drawing types live in [`render`], themes in [`style`].

pub mod canvas;
pub mod prelude;
pub mod widget;

pub use perch_core::*;

/// Geometry, colors and drawing.
pub mod render {
    pub use perch_render::*;
}

/// Themes and theme configuration.
pub mod style {
    pub use perch_style::*;
}
