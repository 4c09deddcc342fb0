//! Concrete widgets.

pub mod popup;

pub use popup::{PopUp, PopUpRenderer};
