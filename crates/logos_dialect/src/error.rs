//! Error types for the dialect module.

use thiserror::Error;

/// Result type alias for dialect operations.
pub type DialectResult<T> = Result<T, DialectError>;

/// Errors that can occur while masking or unmasking Logos source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("Masked directive %{expected} (marker {index}) is missing from formatted output")]
    MarkerMissing { index: usize, expected: String },

    #[error("Marker {index} expected %{expected} but found %{found}")]
    MarkerMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Unknown masked directive %{0} in formatted output")]
    UnknownDirective(String),

    #[error("Terminator for %{directive} (marker {index}) is missing from formatted output")]
    TerminatorMissing { index: usize, directive: String },

    #[error("Formatted output contains {0} unexpected masked directive(s)")]
    UnexpectedMarkers(usize),

    #[error("Invalid substitution sigil: {0}")]
    InvalidSigil(String),
}
