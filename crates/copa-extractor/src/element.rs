//! Triple elements: ordered token spans drawn from one sentence.

use copa_core::{Sentence, TokenId, UPos};
use std::collections::BTreeSet;

/// A token injected by the extractor rather than drawn from the sentence
/// (the appositive copula).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticToken {
    /// Surface form
    pub form: String,
    /// Lemma
    pub lemma: String,
    /// POS tag
    pub upos: UPos,
}

/// One element of a triple: an ordered set of tokens from a single
/// sentence, anchored at a core token.
///
/// Members are kept sorted by sentence index, so rendering is always in
/// surface order. A synthetic element carries an injected token instead of
/// sentence members and bypasses the relation-must-contain-a-verb check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleElement {
    core: Option<TokenId>,
    members: BTreeSet<TokenId>,
    synthetic: Option<SyntheticToken>,
}

impl TripleElement {
    /// An element with no tokens.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An element anchored at (and containing) one token.
    pub fn from_token(core: TokenId) -> Self {
        let mut members = BTreeSet::new();
        members.insert(core);
        Self {
            core: Some(core),
            members,
            synthetic: None,
        }
    }

    /// The injected copula used by appositive triples.
    pub fn synthetic_copula() -> Self {
        Self {
            core: None,
            members: BTreeSet::new(),
            synthetic: Some(SyntheticToken {
                form: "é".to_string(),
                lemma: "ser".to_string(),
                upos: UPos::AUX,
            }),
        }
    }

    /// The anchor token, if any.
    pub fn core(&self) -> Option<TokenId> {
        self.core
    }

    /// Add a token to the span.
    pub fn add(&mut self, id: TokenId) {
        self.members.insert(id);
    }

    /// Remove a token from the span.
    pub fn remove(&mut self, id: TokenId) {
        self.members.remove(&id);
    }

    /// Union another element's members into this one.
    pub fn extend(&mut self, other: &TripleElement) {
        self.members.extend(other.members.iter().copied());
    }

    /// Whether the span holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.synthetic.is_none()
    }

    /// Whether the element is an injected token.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic.is_some()
    }

    /// Number of sentence tokens in the span.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the span contains a token.
    pub fn contains(&self, id: TokenId) -> bool {
        self.members.contains(&id)
    }

    /// Member tokens in sentence order.
    pub fn token_ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.members.iter().copied()
    }

    /// First member in sentence order.
    pub fn first(&self) -> Option<TokenId> {
        self.members.iter().next().copied()
    }

    /// Last member in sentence order.
    pub fn last(&self) -> Option<TokenId> {
        self.members.iter().next_back().copied()
    }

    /// Whether any member is a VERB or AUX token.
    pub fn contains_verbal(&self, sentence: &Sentence) -> bool {
        self.members.iter().any(|&id| sentence.token(id).is_verbal())
    }

    /// Render the span as surface text.
    ///
    /// Tokens join with single spaces; clitics (forms starting with `-`)
    /// and attaching punctuation take no preceding space, opening brackets
    /// take no following space.
    pub fn text(&self, sentence: &Sentence) -> String {
        if let Some(synthetic) = &self.synthetic {
            return synthetic.form.clone();
        }
        let mut out = String::new();
        let mut after_opening = false;
        for &id in &self.members {
            let form = sentence.token(id).form.as_str();
            if !out.is_empty() && !after_opening && !attaches_left(form) {
                out.push(' ');
            }
            out.push_str(form);
            after_opening = attaches_right(form);
        }
        out
    }
}

/// Forms glued to the preceding token.
fn attaches_left(form: &str) -> bool {
    matches!(form, "," | "." | ";" | ":" | "!" | "?" | ")" | "]" | "}") || form.starts_with('-')
}

/// Forms glued to the following token.
fn attaches_right(form: &str) -> bool {
    matches!(form, "(" | "[" | "{")
}
