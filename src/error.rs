//! Error types for Numera
//!
//! Uses `thiserror` for library errors. Every condition here is local and
//! recoverable; the engine never panics on malformed input.

use thiserror::Error;

use crate::alphabet::LetterFilter;

/// Result type alias for Numera operations
pub type NumeraResult<T> = Result<T, NumeraError>;

/// Main error type for Numera operations
#[derive(Error, Debug)]
pub enum NumeraError {
    /// Date string does not match the expected shape, or a component is
    /// non-numeric or out of range. An explicit error, so an invalid date
    /// can never be confused with a computed value.
    #[error("invalid date '{input}' - expected {expected}")]
    InvalidDateFormat {
        input: String,
        expected: &'static str,
    },

    /// The name contains no letters with a numerology value under the given
    /// filter, so the requested number carries no signal.
    #[error("name '{name}' has no letters to sum under the {filter} filter")]
    DegenerateName { name: String, filter: LetterFilter },
}
