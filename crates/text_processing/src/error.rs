//! Error types for text processing

use krishi_mitra_core::Intent;
use thiserror::Error;

/// Text processing errors
///
/// Classification itself never fails; these only arise when building a
/// classifier from a custom pattern table.
#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Invalid pattern for intent '{intent}': {pattern}: {source}")]
    InvalidPattern {
        intent: Intent,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Intent '{0}' is the fallback and cannot carry patterns")]
    FallbackIntentScored(Intent),

    #[error("Intent '{0}' appears more than once in the pattern table")]
    DuplicateIntent(Intent),
}

/// Result type for text processing operations
pub type Result<T> = std::result::Result<T, TextProcessingError>;
