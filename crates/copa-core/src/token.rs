//! A single parsed token.

use crate::{DepRel, MorphFeatures, UPos};
use serde::{Deserialize, Serialize};

/// One token of a parsed sentence, immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Token ID, 1-based within the sentence
    pub id: u32,
    /// Surface form
    pub form: String,
    /// Lemma
    pub lemma: String,
    /// Universal POS tag
    pub upos: UPos,
    /// Language-specific POS tag, if annotated
    pub xpos: Option<String>,
    /// Morphological features
    pub feats: MorphFeatures,
    /// Head token ID (0 for the root)
    pub head: u32,
    /// Dependency relation to the head
    pub deprel: DepRel,
}

impl Token {
    /// Whether the token is a VERB or AUX.
    pub fn is_verbal(&self) -> bool {
        self.upos.is_verbal()
    }

    /// Whether the token is punctuation.
    pub fn is_punct(&self) -> bool {
        self.upos == UPos::PUNCT
    }

    /// Whether the token heads the sentence.
    pub fn is_root(&self) -> bool {
        self.head == 0
    }

    /// Relative pronouns: PRON or SCONJ with `PronType=Rel`.
    pub fn is_relative_pronoun(&self) -> bool {
        matches!(self.upos, UPos::PRON | UPos::SCONJ) && self.feats.has("PronType", "Rel")
    }
}
