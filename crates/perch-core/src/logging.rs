//! Logging facilities for Perch.
//!
//! Perch uses the `tracing` crate for instrumentation. Nothing is printed
//! until the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("perch=debug")
//!         .init();
//! }
//! ```
//!
//! Every event is emitted with one of the [`targets`] below so individual
//! subsystems can be filtered.

/// Target names for log filtering.
///
/// Use these with `tracing` directives, e.g. `RUST_LOG=perch::popup=trace`.
pub mod targets {
    /// Object registry target.
    pub const OBJECT: &str = "perch_core::object";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "perch_core::signal";
    /// Theme loading and live theme changes.
    pub const THEME: &str = "perch_style::theme";
    /// Host canvas and overlay stack.
    pub const CANVAS: &str = "perch::canvas";
    /// Popup lifecycle, layout and tap handling.
    pub const POPUP: &str = "perch::popup";
}

/// Span names used for `tracing::instrument`.
pub mod span_names {
    /// Popup renderer layout pass.
    pub const POPUP_LAYOUT: &str = "perch::popup::layout";
    /// Signal emission.
    pub const SIGNAL_EMIT: &str = "perch_core::signal::emit";
}
