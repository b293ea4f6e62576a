//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided ID does not carry the expected type prefix.
    WrongPrefix {
        expected: &'static str,
        actual: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::WrongPrefix { expected, actual } => {
                write!(f, "Expected an id prefixed '{}', got: {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
