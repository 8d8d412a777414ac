//! Error handling for the extractor core.

use thiserror::Error;

/// Result type for extractor operations.
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Errors raised inside the extractor.
///
/// A well-formed `Sentence` cannot trigger these; they exist so that a
/// malformed tree that slipped past construction fails loudly for its own
/// sentence instead of corrupting a batch.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("internal invariant violated in sentence '{sent_id}': {detail}")]
    InternalInvariant { sent_id: String, detail: String },
}

impl ExtractionError {
    /// Create an internal-invariant error.
    pub fn internal<S: Into<String>, D: Into<String>>(sent_id: S, detail: D) -> Self {
        Self::InternalInvariant {
            sent_id: sent_id.into(),
            detail: detail.into(),
        }
    }
}
