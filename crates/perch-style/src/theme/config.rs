//! Theme configuration files.
//!
//! ```toml
//! mode = "dark"          # light | dark | high-contrast
//! padding = 6.0
//!
//! [colors]               # any subset; the rest comes from the mode's palette
//! background = "#1C1C1E"
//! shadow = "#00000066"
//! ```

use std::path::Path;

use perch_core::logging::targets;
use perch_render::Color;
use serde::Deserialize;

use super::{ColorPalette, Theme, ThemeMode};
use crate::error::{Error, Result};

/// Color overrides, as hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub primary: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub foreground: Option<String>,
    pub border: Option<String>,
    pub shadow: Option<String>,
}

impl PaletteConfig {
    /// Apply the overrides on top of `base`.
    pub fn apply(&self, mut base: ColorPalette) -> Result<ColorPalette> {
        let fields = [
            ("primary", &self.primary, &mut base.primary),
            ("background", &self.background, &mut base.background),
            ("surface", &self.surface, &mut base.surface),
            ("foreground", &self.foreground, &mut base.foreground),
            ("border", &self.border, &mut base.border),
            ("shadow", &self.shadow, &mut base.shadow),
        ];
        for (name, value, slot) in fields {
            if let Some(value) = value {
                *slot = parse_color(name, value)?;
            }
        }
        Ok(base)
    }
}

/// Deserialized theme file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Base mode; selects the palette the overrides apply to.
    pub mode: ThemeMode,
    /// Padding override.
    pub padding: Option<f32>,
    /// Color overrides.
    pub colors: PaletteConfig,
}

impl ThemeConfig {
    /// Build a theme from this configuration.
    pub fn build(&self) -> Result<Theme> {
        let palette = self.colors.apply(self.mode.palette())?;
        let mut theme = Theme::custom(self.mode, palette);
        if let Some(padding) = self.padding {
            if !padding.is_finite() || padding < 0.0 {
                return Err(Error::invalid_value(
                    "padding",
                    format!("must be a non-negative number, got {padding}"),
                ));
            }
            theme.padding = padding;
        }
        Ok(theme)
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| Error::invalid_color(field, value))
}

impl Theme {
    /// Build a theme from a configuration.
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        config.build()
    }

    /// Parse a theme from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(source)?;
        config.build()
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::THEME, path = %path.display(), mode = ?theme.mode, "loaded theme");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::theme::DEFAULT_PADDING;

    #[test]
    fn empty_config_is_light_theme() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::light());
        assert_eq!(theme.padding, DEFAULT_PADDING);
    }

    #[test]
    fn overrides_apply_to_mode_palette() {
        let theme = Theme::from_toml_str(
            r##"
            mode = "high-contrast"
            padding = 8.0

            [colors]
            background = "#101010"
            "##,
        )
        .unwrap();

        assert_eq!(theme.mode, ThemeMode::HighContrast);
        assert_eq!(theme.padding, 8.0);
        assert_eq!(theme.palette.background, Color::from_rgb8(0x10, 0x10, 0x10));
        assert_eq!(theme.palette.shadow, ColorPalette::high_contrast().shadow);
    }

    #[test]
    fn invalid_color_is_reported() {
        let err = Theme::from_toml_str("[colors]\nshadow = \"black\"").unwrap_err();
        match err {
            Error::InvalidColor { field, value } => {
                assert_eq!(field, "shadow");
                assert_eq!(value, "black");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_padding_is_rejected() {
        let err = Theme::from_toml_str("padding = -2.0").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Theme::from_toml_str("margin = 3.0").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"dark\"\npadding = 5.5").unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.padding, 5.5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
