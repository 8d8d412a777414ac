//! Rule-based triple extractor over UD dependency trees for Portuguese.
//!
//! Given a parsed `copa_core::Sentence`, the extractor walks the
//! dependency tree and emits deduplicated propositional triples
//! (subject; relation; complement), possibly with nested sub-extractions
//! for subordinate clauses. The entry point is [`extract`] (or the
//! [`TripleExtractor`] wrapper); behaviour is controlled by
//! [`ExtractorConfig`], whose default is the minimal baseline with every
//! optional module off.
//!
//! The pipeline per predicate head: find the subject, assemble the verbal
//! nucleus, extract complements (recursing into subordinate clauses),
//! replicate across coordinated verbs, then sanitize, validate, and
//! deduplicate. Appositives independently contribute synthetic "is-a"
//! triples and, optionally, transitivity inferences.

mod appositive;
mod complement;
mod config;
mod coordination;
pub mod deps;
mod dfs;
mod element;
mod error;
mod extraction;
mod extractor;
mod relation;
mod sanitize;
mod subject;

pub use config::ExtractorConfig;
pub use element::{SyntheticToken, TripleElement};
pub use error::{ExtractionError, ExtractionResult};
pub use extraction::{Extraction, ExtractionSet};
pub use extractor::{extract, TripleExtractor};
