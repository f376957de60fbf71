//! Errors reported by sequence operations.

use thiserror::Error;

/// Error returned by [`NumberSequence`](crate::NumberSequence) operations.
///
/// Every failing operation leaves the sequence exactly as it was before the
/// call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A sequence was built from fewer than two numbers.
    #[error("not a sequence: {length} number(s) given, at least 2 required")]
    InvalidConstruction { length: usize },

    /// A position does not name an existing element.
    #[error("wrong position {position}: valid positions are 0..{length}")]
    OutOfRange { position: usize, length: usize },

    /// Removing would leave fewer than two numbers.
    #[error("only two numbers in the sequence")]
    MinimumLength,
}

impl SequenceError {
    /// Stable code for this kind of error (e.g. `"E002"`).
    pub fn code(&self) -> &'static str {
        match self {
            SequenceError::InvalidConstruction { .. } => "E001",
            SequenceError::OutOfRange { .. } => "E002",
            SequenceError::MinimumLength => "E003",
        }
    }
}

pub type Result<T> = core::result::Result<T, SequenceError>;
