//! Coordinated predicates: splitting conjoined verbs and sharing
//! complements across them.

use crate::deps;
use crate::extraction::Extraction;
use crate::relation::effective_verb;
use copa_core::{DepRel, Sentence, TokenId, UPos};

/// Conjoined verbs that continue the current proposition.
///
/// A `conj` dependent counts iff it is verbal and has no subject of its
/// own; one with a subject starts an independent proposition and is left
/// to the top-level loop.
pub(crate) fn verbal_conj_peers(sentence: &Sentence, predicate: TokenId) -> Vec<TokenId> {
    let anchor = effective_verb(sentence, predicate);
    sentence
        .children_by_dep(anchor, &DepRel::Conj)
        .into_iter()
        .filter(|&w| {
            sentence.token(w).is_verbal()
                && !sentence
                    .children(w)
                    .iter()
                    .any(|&c| deps::is_subject_dep(&sentence.token(c).deprel))
        })
        .collect()
}

/// Share the last complement of a coordinated group backwards.
///
/// When the last extraction of the group carries a complement and an
/// earlier one does not, and both relations are anchored on full verbs,
/// the complement is copied back ("Ele leu e escreveu um livro").
pub(crate) fn redistribute_shared_complements(group: &mut [Extraction], sentence: &Sentence) {
    let Some((last, rest)) = group.split_last_mut() else {
        return;
    };
    if rest.is_empty() || last.complement.is_empty() || !core_is_verb(last, sentence) {
        return;
    }
    let shared = last.complement.clone();
    for extraction in rest {
        if extraction.complement.is_empty() && core_is_verb(extraction, sentence) {
            extraction.complement = shared.clone();
        }
    }
}

fn core_is_verb(extraction: &Extraction, sentence: &Sentence) -> bool {
    extraction
        .relation
        .core()
        .is_some_and(|core| sentence.token(core).upos == UPos::VERB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TripleElement;
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

    /// "Ele leu e escreveu um livro."
    fn sentence() -> Sentence {
        Sentence::new(
            "t",
            "Ele leu e escreveu um livro.",
            vec![
                tok(1, "Ele", UPos::PRON, 2, "nsubj"),
                tok(2, "leu", UPos::VERB, 0, "root"),
                tok(3, "e", UPos::CCONJ, 4, "cc"),
                tok(4, "escreveu", UPos::VERB, 2, "conj"),
                tok(5, "um", UPos::DET, 6, "det"),
                tok(6, "livro", UPos::NOUN, 4, "obj"),
                tok(7, ".", UPos::PUNCT, 2, "punct"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn conjoined_verb_without_subject_is_a_peer() {
        let s = sentence();
        assert_eq!(verbal_conj_peers(&s, 1), vec![3]);
    }

    #[test]
    fn conjoined_verb_with_its_own_subject_is_not_a_peer() {
        // "Ele leu e ela escreveu."
        let s = Sentence::new(
            "t",
            "Ele leu e ela escreveu.",
            vec![
                tok(1, "Ele", UPos::PRON, 2, "nsubj"),
                tok(2, "leu", UPos::VERB, 0, "root"),
                tok(3, "e", UPos::CCONJ, 5, "cc"),
                tok(4, "ela", UPos::PRON, 5, "nsubj"),
                tok(5, "escreveu", UPos::VERB, 2, "conj"),
                tok(6, ".", UPos::PUNCT, 2, "punct"),
            ],
        )
        .unwrap();
        assert!(verbal_conj_peers(&s, 1).is_empty());
    }

    #[test]
    fn last_complement_fills_earlier_empty_ones() {
        let s = sentence();
        let subject = TripleElement::from_token(0);
        let mut complement = TripleElement::from_token(5);
        complement.add(4);
        let mut group = vec![
            Extraction::new(
                subject.clone(),
                TripleElement::from_token(1),
                TripleElement::empty(),
                vec![],
                false,
            ),
            Extraction::new(
                subject,
                TripleElement::from_token(3),
                complement.clone(),
                vec![],
                false,
            ),
        ];
        redistribute_shared_complements(&mut group, &s);
        assert_eq!(group[0].complement.text(&s), "um livro");
        assert_eq!(group[1].complement.text(&s), "um livro");
    }

    #[test]
    fn auxiliary_anchored_relations_do_not_receive_complements() {
        let s = sentence();
        // pretend the first relation is anchored on an AUX-like core (use
        // the CCONJ token so the core is not a VERB)
        let mut group = vec![
            Extraction::new(
                TripleElement::from_token(0),
                TripleElement::from_token(2),
                TripleElement::empty(),
                vec![],
                false,
            ),
            Extraction::new(
                TripleElement::from_token(0),
                TripleElement::from_token(3),
                TripleElement::from_token(5),
                vec![],
                false,
            ),
        ];
        redistribute_shared_complements(&mut group, &s);
        assert!(group[0].complement.is_empty());
    }
}
