//! Error types for Perch core.

use std::fmt;

/// Errors that can occur during object registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is invalid or the object has been dropped.
    InvalidObjectId,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidObjectId => write!(f, "Invalid or destroyed object ID"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// A specialized Result type for object registry operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;
