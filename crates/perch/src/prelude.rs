//! Commonly used types, for glob import.
//!
//! ```
//! use perch::prelude::*;
//! ```

pub use perch_core::{Object, ObjectId, Signal};
pub use perch_render::{
    shared, CanvasObject, Color, Point, Rect, RecordingRenderer, Rectangle, Renderer,
    SharedObject, Size,
};
pub use perch_style::{Theme, ThemeHandle, ThemeMode, ThemeProvider};

pub use crate::canvas::{Canvas, HostCanvas};
pub use crate::widget::{PointEvent, PopUp, Tappable, Widget, WidgetBase, WidgetEvent};
