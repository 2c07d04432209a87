//! errors.rs - Custom error types for the patex-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.

use thiserror::Error;

use crate::positioned_text::Span;

/// This enum represents all possible error types in the `patex-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PatexError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    /// The integration cursor and a record's span disagree. This means the
    /// marked text and the records file are not a matched extraction pair.
    #[error("Integration cursor out of sync for record span {span}: expected text position {expected}, found {actual}")]
    IntegrationConsistency {
        span: Span,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to serialize or deserialize extraction records: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
