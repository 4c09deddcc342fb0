//! Theme system with built-in themes.

mod builtin;
mod config;
mod palette;
mod provider;

pub use builtin::{Theme, ThemeMode, DEFAULT_PADDING};
pub use config::{PaletteConfig, ThemeConfig};
pub use palette::ColorPalette;
pub use provider::{ThemeHandle, ThemeProvider};
