//! Built-in themes.

use perch_render::Color;
use serde::Deserialize;

use super::ColorPalette;

/// Padding used by the built-in themes.
pub const DEFAULT_PADDING: f32 = 4.0;

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl ThemeMode {
    /// The built-in palette for this mode.
    pub const fn palette(self) -> ColorPalette {
        match self {
            Self::Light => ColorPalette::light(),
            Self::Dark => ColorPalette::dark(),
            Self::HighContrast => ColorPalette::high_contrast(),
        }
    }
}

/// A complete theme: colors plus layout metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ColorPalette,
    /// Uniform inset between a container's edge and its content.
    pub padding: f32,
}

impl Theme {
    /// Create a light theme.
    pub const fn light() -> Self {
        Self::custom(ThemeMode::Light, ColorPalette::light())
    }

    /// Create a dark theme.
    pub const fn dark() -> Self {
        Self::custom(ThemeMode::Dark, ColorPalette::dark())
    }

    /// Create a high-contrast theme.
    pub const fn high_contrast() -> Self {
        Self::custom(ThemeMode::HighContrast, ColorPalette::high_contrast())
    }

    /// Create a custom theme from a palette.
    pub const fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        Self {
            mode,
            palette,
            padding: DEFAULT_PADDING,
        }
    }

    /// Set the padding using builder pattern.
    ///
    /// Negative and non-finite values are treated as zero.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        self
    }

    /// Get the primary color.
    pub fn primary(&self) -> Color {
        self.palette.primary
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.palette.foreground
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
