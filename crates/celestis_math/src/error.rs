//! Errors produced by math operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

/// The ways a math operation can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    /// An argument was outside the domain of the operation, such as a
    /// non-finite vector component.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// A string did not match the textual representation of the requested
    /// type.
    #[error("Invalid format: {0}")]
    Format(String),
}

impl MathError {
    /// Whether this is a [`MathError::Format`] error.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
