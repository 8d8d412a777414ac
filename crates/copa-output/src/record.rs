//! Flat, serializable records for rendered extractions.

use copa_core::Sentence;
use copa_extractor::{Extraction, ExtractionSet};
use serde::{Deserialize, Serialize};

/// One rendered extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// Subject text
    pub arg1: String,
    /// Relation text
    pub rel: String,
    /// Complement text
    pub arg2: String,
    /// Nested propositions of subordinate clauses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_extractions: Vec<ExtractionRecord>,
}

impl ExtractionRecord {
    fn from_extraction(sentence: &Sentence, extraction: &Extraction) -> Self {
        Self {
            arg1: extraction.subject.text(sentence),
            rel: extraction.relation.text(sentence),
            arg2: extraction.complement.text(sentence),
            sub_extractions: extraction
                .sub_extractions
                .iter()
                .map(|sub| Self::from_extraction(sentence, sub))
                .collect(),
        }
    }
}

/// All extractions of one sentence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceRecord {
    /// Sentence identifier
    pub id: String,
    /// Original surface text
    pub sentence: String,
    /// Extractions in canonical order
    pub extractions: Vec<ExtractionRecord>,
}

impl SentenceRecord {
    /// Render an extraction set against its sentence.
    pub fn from_extractions(sentence: &Sentence, set: &ExtractionSet) -> Self {
        Self {
            id: sentence.sent_id().to_string(),
            sentence: sentence.text().to_string(),
            extractions: set
                .iter()
                .map(|e| ExtractionRecord::from_extraction(sentence, e))
                .collect(),
        }
    }
}
