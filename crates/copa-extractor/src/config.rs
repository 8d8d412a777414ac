//! Extractor configuration.

use serde::{Deserialize, Serialize};

/// Switches for the optional extraction modules.
///
/// The default is the minimal baseline: only the basic
/// (subject; relation; complement) triple per non-subordinate predicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Split coordinated verbs into separate extractions and decompose
    /// coordinated complements into one extraction per conjunct
    pub coordinating_conjunctions: bool,

    /// Emit nested sub-extractions for ccomp/advcl clauses that carry an
    /// explicit subject
    pub subordinating_conjunctions: bool,

    /// Permit extractions with an empty (hidden) subject
    pub hidden_subjects: bool,

    /// Synthesize "is-a" triples from appositives
    pub appositive: bool,

    /// Infer triples across appositives sharing a subject; only effective
    /// together with `appositive`
    pub appositive_transitivity: bool,

    /// Verbose tracing; never changes outputs
    pub debug: bool,
}

impl ExtractorConfig {
    /// Every extraction module enabled.
    pub fn full() -> Self {
        Self {
            coordinating_conjunctions: true,
            subordinating_conjunctions: true,
            hidden_subjects: true,
            appositive: true,
            appositive_transitivity: true,
            debug: false,
        }
    }

    /// Whether appositive transitivity is actually active.
    pub fn appositive_transitivity_enabled(&self) -> bool {
        self.appositive && self.appositive_transitivity
    }
}
