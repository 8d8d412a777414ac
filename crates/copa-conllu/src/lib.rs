//! CoNLL-U v2 reader and writer for copa.
//!
//! This crate is the I/O boundary: it turns CoNLL-U text into validated
//! `copa_core::Sentence` values and back. Malformed blocks never reach the
//! extractor; they fail here with `ConlluError::MalformedSentence`.

mod error;
mod reader;
mod writer;

pub use error::{ConlluError, ConlluResult};
pub use reader::{ConlluReader, ConlluReaderConfig};
pub use writer::{write_document, write_sentence};
