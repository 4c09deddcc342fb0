//! Color palette definitions.

use perch_render::Color;

/// A color palette for theming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Main brand color.
    pub primary: Color,
    /// Window and popup background color.
    pub background: Color,
    /// Raised surface color (cards, panels).
    pub surface: Color,
    /// Primary text color.
    pub foreground: Color,
    /// Standard border color.
    pub border: Color,
    /// Shadow and modal overlay tint. Usually semi-transparent.
    pub shadow: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x7A, 0xFF),
            background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface: Color::from_rgb8(0xF8, 0xF9, 0xFA),
            foreground: Color::from_rgb8(0x21, 0x25, 0x29),
            border: Color::from_rgb8(0xDE, 0xE2, 0xE6),
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0x33),
        }
    }

    /// Create a dark theme palette.
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb8(0x0A, 0x84, 0xFF),
            background: Color::from_rgb8(0x1C, 0x1C, 0x1E),
            surface: Color::from_rgb8(0x2C, 0x2C, 0x2E),
            foreground: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            border: Color::from_rgb8(0x38, 0x38, 0x3A),
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0x66),
        }
    }

    /// Create a high-contrast palette.
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x00, 0xFF),
            background: Color::WHITE,
            surface: Color::WHITE,
            foreground: Color::BLACK,
            border: Color::BLACK,
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0x99),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadows_are_translucent() {
        for palette in [
            ColorPalette::light(),
            ColorPalette::dark(),
            ColorPalette::high_contrast(),
        ] {
            assert!(palette.shadow.a > 0.0 && palette.shadow.a < 1.0);
            assert_eq!(palette.background.a, 1.0);
        }
    }
}
