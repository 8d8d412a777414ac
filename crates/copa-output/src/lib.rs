//! Output serializers for copa extractions.
//!
//! Converts an `ExtractionSet` plus its `Sentence` into serializable
//! records and renders them as structured JSON, a tabular listing with
//! hierarchical ids, or plain indented text.

mod formats;
mod record;

use thiserror::Error;

pub use formats::{to_json, to_tabular, to_text};
pub use record::{ExtractionRecord, SentenceRecord};

/// Result type for rendering operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors raised while rendering extractions.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}
