//! Error types for the theme system.

use std::path::PathBuf;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The theme file is not valid TOML or does not match the schema.
    #[error("Theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color string could not be parsed.
    #[error("Invalid color for '{field}': '{value}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { field: String, value: String },

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a color error.
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
