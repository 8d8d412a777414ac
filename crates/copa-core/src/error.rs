//! Error types for the sentence model.

use thiserror::Error;

/// Result type for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building a `Sentence` from parsed tokens.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("sentence has no tokens")]
    EmptySentence,

    #[error("token ids are not contiguous from 1: token at position {position} has id {id}")]
    NonContiguousIds { position: usize, id: u32 },

    #[error("token {id} points to nonexistent head {head}")]
    InvalidHead { id: u32, head: u32 },

    #[error("no token is attached to the root")]
    MissingRoot,

    #[error("head chain starting at token {id} forms a cycle")]
    HeadCycle { id: u32 },
}
