//! Themes for Perch.
//!
//! A [`Theme`] bundles a [`ColorPalette`] with the metrics overlays are laid
//! out with. Widgets never hold on to theme values: they query a
//! [`ThemeProvider`] on every layout pass, so swapping the theme behind a
//! [`ThemeHandle`] is picked up by the next refresh.
//!
//! Themes can also be loaded from TOML:
//!
//! ```
//! use perch_style::{Theme, ThemeMode, ThemeProvider};
//!
//! let theme = Theme::from_toml_str(r##"
//!     mode = "dark"
//!     padding = 6.0
//!
//!     [colors]
//!     shadow = "#00000080"
//! "##)?;
//!
//! assert_eq!(theme.mode, ThemeMode::Dark);
//! assert_eq!(theme.padding(), 6.0);
//! # Ok::<(), perch_style::Error>(())
//! ```

pub mod theme;

mod error;

pub use error::{Error, Result};
pub use theme::{ColorPalette, Theme, ThemeConfig, ThemeHandle, ThemeMode, ThemeProvider};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::theme::{ColorPalette, Theme, ThemeHandle, ThemeMode, ThemeProvider};
}
