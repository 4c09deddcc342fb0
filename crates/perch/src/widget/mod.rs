//! Widgets.
//!
//! - [`Widget`]: the trait every widget implements
//! - [`WidgetBase`]: shared identity, geometry and visibility state
//! - [`PointEvent`] and [`Tappable`]: pointer input
//! - [`PopUp`]: the floating overlay

mod base;
mod events;
mod traits;
pub mod widgets;


pub use base::WidgetBase;
pub use events::{EventBase, PointEvent, Tappable, WidgetEvent};
pub use traits::Widget;
pub use widgets::{PopUp, PopUpRenderer};
