//! Wire-level error types.

use thiserror::Error;

/// Errors raised at the row/parameter boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Positional access past the end of a row or parameter buffer.
    #[error("index {index} out of range for width {width}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of slots available.
        width: usize,
    },

    /// The stored value has a different wire variant than expected.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Wire variant the caller asked for.
        expected: &'static str,
        /// Wire variant actually present.
        actual: &'static str,
    },

    /// Serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization failed.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}
