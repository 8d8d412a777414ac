//! Errors at the CoNLL-U boundary.

use thiserror::Error;

/// Result type for reader and writer operations.
pub type ConlluResult<T> = Result<T, ConlluError>;

/// Errors raised while reading or writing CoNLL-U text.
#[derive(Error, Debug)]
pub enum ConlluError {
    /// A block that cannot become a well-formed sentence: missing columns,
    /// a non-integer head, or a broken head chain.
    #[error("malformed sentence '{sent_id}': {reason}")]
    MalformedSentence { sent_id: String, reason: String },

    #[error("I/O error during {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConlluError {
    /// Create a malformed-sentence error.
    pub fn malformed<S: Into<String>, R: Into<String>>(sent_id: S, reason: R) -> Self {
        Self::MalformedSentence {
            sent_id: sent_id.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error.
    pub fn io<S: Into<String>>(operation: S, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}
