//! Error types for input validation.
//!
//! The numeric engine itself is total; only raw caller input can fail.

/// Errors produced while turning raw input into engine arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The value is not a finite integer.
    #[error("{field} must be an integer, got \"{raw}\"")]
    NotInteger {
        /// Name of the field that failed.
        field: &'static str,
        /// The raw text as supplied.
        raw: String,
    },

    /// The value is an integer outside the accepted bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the field that failed.
        field: &'static str,
        /// The parsed value.
        value: i64,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },
}

/// Convenience result type for input validation.
pub type InputResult<T> = Result<T, InputError>;
