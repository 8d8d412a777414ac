//! Span builders: depth-first walks that collect triple elements.
//!
//! Both walks use an explicit stack and a visited set, so a malformed tree
//! that somehow survived sentence construction terminates with an
//! `InternalInvariant` instead of looping.

use crate::deps;
use crate::element::TripleElement;
use crate::error::{ExtractionError, ExtractionResult};
use copa_core::{DepRel, Sentence, TokenId, UPos};
use std::collections::HashSet;

/// Switches for the nominal-phrase walk.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct NominalOptions {
    /// The span will serve as a subject: strip a leading case adposition
    pub as_subject: bool,
    /// Drop `conj` and `cc` children
    pub ignore_conjunctions: bool,
    /// Drop `appos` children
    pub ignore_appos: bool,
}

impl NominalOptions {
    /// Options for subject spans.
    pub(crate) fn subject() -> Self {
        Self {
            as_subject: true,
            ignore_appos: true,
            ignore_conjunctions: false,
        }
    }
}

/// Collect a nominal-like span rooted at `start`.
///
/// A child is entered iff its relation is in the nominal walk set, subject
/// to the `ignore_*` switches.
pub(crate) fn nominal_phrase(
    sentence: &Sentence,
    start: TokenId,
    opts: NominalOptions,
) -> ExtractionResult<TripleElement> {
    let mut element = TripleElement::from_token(start);
    let mut visited: HashSet<TokenId> = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for &child in sentence.children(current) {
            let rel = &sentence.token(child).deprel;
            if !deps::is_nominal_dfs_dep(rel) {
                continue;
            }
            if opts.ignore_conjunctions && matches!(rel, DepRel::Conj | DepRel::Cc) {
                continue;
            }
            if opts.ignore_appos && *rel == DepRel::Appos {
                continue;
            }
            if !visited.insert(child) {
                return Err(cycle_error(sentence, child));
            }
            element.add(child);
            stack.push(child);
        }
    }

    if opts.as_subject {
        strip_leading_case_adposition(&mut element, sentence);
    }
    Ok(element)
}

/// Collect a broad complement span rooted at `start`.
///
/// Subject relations are skipped with their whole subtree; a `mark` child
/// terminates its branch without being included. With
/// `ignore_conjunctions_at_start`, `conj` and `cc` children of the start
/// token itself are skipped so coordination can be handled per conjunct.
pub(crate) fn complement_phrase(
    sentence: &Sentence,
    start: TokenId,
    ignore_conjunctions_at_start: bool,
) -> ExtractionResult<TripleElement> {
    let mut element = TripleElement::from_token(start);
    let mut visited: HashSet<TokenId> = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for &child in sentence.children(current) {
            let rel = &sentence.token(child).deprel;
            if deps::is_complement_ignore_dep(rel) || deps::is_complement_boundary_dep(rel) {
                continue;
            }
            if ignore_conjunctions_at_start
                && current == start
                && matches!(rel, DepRel::Conj | DepRel::Cc)
            {
                continue;
            }
            if !visited.insert(child) {
                return Err(cycle_error(sentence, child));
            }
            element.add(child);
            stack.push(child);
        }
    }
    Ok(element)
}

/// A preposition at the left edge of a subject span is structural noise.
fn strip_leading_case_adposition(element: &mut TripleElement, sentence: &Sentence) {
    if let Some(first) = element.first() {
        let token = sentence.token(first);
        if token.upos == UPos::ADP && token.deprel == DepRel::Case {
            element.remove(first);
        }
    }
}

fn cycle_error(sentence: &Sentence, token: TokenId) -> ExtractionError {
    ExtractionError::internal(
        sentence.sent_id(),
        format!("token {} revisited during span walk", token + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use copa_core::{MorphFeatures, Token};

    fn tok(id: u32, form: &str, upos: UPos, head: u32, deprel: &str) -> Token {
        Token {
            id,
            form: form.to_string(),
            lemma: form.to_lowercase(),
            upos,
            xpos: None,
            feats: MorphFeatures::default(),
            head,
            deprel: DepRel::from(deprel),
        }
    }

    /// "Ele gosta de banana, pera e maçã ."
    fn coordination_sentence() -> Sentence {
        Sentence::new(
            "t",
            "Ele gosta de banana, pera e maçã.",
            vec![
                tok(1, "Ele", UPos::PRON, 2, "nsubj"),
                tok(2, "gosta", UPos::VERB, 0, "root"),
                tok(3, "de", UPos::ADP, 4, "case"),
                tok(4, "banana", UPos::NOUN, 2, "obl"),
                tok(5, ",", UPos::PUNCT, 6, "punct"),
                tok(6, "pera", UPos::NOUN, 4, "conj"),
                tok(7, "e", UPos::CCONJ, 8, "cc"),
                tok(8, "maçã", UPos::NOUN, 4, "conj"),
                tok(9, ".", UPos::PUNCT, 2, "punct"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn nominal_walk_descends_the_whole_coordination() {
        let s = coordination_sentence();
        let span = nominal_phrase(&s, 3, NominalOptions::default()).unwrap();
        assert_eq!(span.text(&s), "de banana, pera e maçã");
    }

    #[test]
    fn nominal_walk_can_drop_conjuncts() {
        let s = coordination_sentence();
        let opts = NominalOptions {
            ignore_conjunctions: true,
            ..Default::default()
        };
        let span = nominal_phrase(&s, 3, opts).unwrap();
        assert_eq!(span.text(&s), "de banana");
    }

    #[test]
    fn subject_span_loses_its_leading_preposition() {
        let s = coordination_sentence();
        let span = nominal_phrase(&s, 3, NominalOptions::subject()).unwrap();
        assert_eq!(span.text(&s), "banana, pera e maçã");
    }

    /// "Ele disse que iria viajar ."
    fn subordinate_sentence() -> Sentence {
        Sentence::new(
            "t",
            "Ele disse que iria viajar.",
            vec![
                tok(1, "Ele", UPos::PRON, 2, "nsubj"),
                tok(2, "disse", UPos::VERB, 0, "root"),
                tok(3, "que", UPos::SCONJ, 5, "mark"),
                tok(4, "iria", UPos::AUX, 5, "aux"),
                tok(5, "viajar", UPos::VERB, 2, "ccomp"),
                tok(6, ".", UPos::PUNCT, 2, "punct"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn complement_walk_stops_at_mark_and_skips_subjects() {
        let s = subordinate_sentence();
        let span = complement_phrase(&s, 4, false).unwrap();
        assert_eq!(span.text(&s), "iria viajar");

        let whole = complement_phrase(&s, 1, false).unwrap();
        // nsubj "Ele" skipped, mark "que" bounded out
        assert_eq!(whole.text(&s), "disse iria viajar.");
    }

    #[test]
    fn complement_walk_can_drop_start_conjuncts() {
        let s = coordination_sentence();
        let span = complement_phrase(&s, 3, true).unwrap();
        assert_eq!(span.text(&s), "de banana");
    }
}
