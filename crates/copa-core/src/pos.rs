//! Universal POS tags (UPOS) following the UD v2 specification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech tag from the closed UD v2 set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UPos {
    /// Adjective
    ADJ,
    /// Adposition
    ADP,
    /// Adverb
    ADV,
    /// Auxiliary
    AUX,
    /// Coordinating conjunction
    CCONJ,
    /// Determiner
    DET,
    /// Interjection
    INTJ,
    /// Noun
    NOUN,
    /// Numeral
    NUM,
    /// Particle
    PART,
    /// Pronoun
    PRON,
    /// Proper noun
    PROPN,
    /// Punctuation
    PUNCT,
    /// Subordinating conjunction
    SCONJ,
    /// Symbol
    SYM,
    /// Verb
    VERB,
    /// Other (for unknown/non-standard tags)
    X,
}

impl UPos {
    /// The canonical UD tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ADJ => "ADJ",
            Self::ADP => "ADP",
            Self::ADV => "ADV",
            Self::AUX => "AUX",
            Self::CCONJ => "CCONJ",
            Self::DET => "DET",
            Self::INTJ => "INTJ",
            Self::NOUN => "NOUN",
            Self::NUM => "NUM",
            Self::PART => "PART",
            Self::PRON => "PRON",
            Self::PROPN => "PROPN",
            Self::PUNCT => "PUNCT",
            Self::SCONJ => "SCONJ",
            Self::SYM => "SYM",
            Self::VERB => "VERB",
            Self::X => "X",
        }
    }

    /// Whether the tag is verbal (VERB or AUX).
    pub fn is_verbal(&self) -> bool {
        matches!(self, Self::VERB | Self::AUX)
    }
}

impl From<&str> for UPos {
    fn from(s: &str) -> Self {
        match s {
            "ADJ" => Self::ADJ,
            "ADP" => Self::ADP,
            "ADV" => Self::ADV,
            "AUX" => Self::AUX,
            "CCONJ" => Self::CCONJ,
            "DET" => Self::DET,
            "INTJ" => Self::INTJ,
            "NOUN" => Self::NOUN,
            "NUM" => Self::NUM,
            "PART" => Self::PART,
            "PRON" => Self::PRON,
            "PROPN" => Self::PROPN,
            "PUNCT" => Self::PUNCT,
            "SCONJ" => Self::SCONJ,
            "SYM" => Self::SYM,
            "VERB" => Self::VERB,
            _ => Self::X,
        }
    }
}

impl fmt::Display for UPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
