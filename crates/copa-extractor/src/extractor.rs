//! The extraction orchestrator.
//!
//! Iterates the predicate heads of a sentence, builds subject, relation,
//! and complements for each, replicates across coordinated verbs, adds
//! appositive triples, applies transitivity, then sanitizes, validates,
//! and deduplicates.

use crate::appositive::synthesize_appositives;
use crate::complement::complement_variants;
use crate::config::ExtractorConfig;
use crate::coordination::{redistribute_shared_complements, verbal_conj_peers};
use crate::element::TripleElement;
use crate::error::{ExtractionError, ExtractionResult};
use crate::extraction::{Extraction, ExtractionSet};
use crate::relation::{build_relation, relation_is_valid};
use crate::sanitize::sanitize_element;
use crate::subject::{find_subject, SubjectOutcome};
use copa_core::{DepRel, Sentence, TokenId};
use tracing::{debug, trace};

/// Clause recursion bound; dependency trees are far shallower in practice.
const MAX_CLAUSE_DEPTH: usize = 64;

/// Extract all triples from one sentence.
///
/// Pure and deterministic: the same sentence and configuration always
/// produce the same set, in the same order.
pub fn extract(
    sentence: &Sentence,
    config: &ExtractorConfig,
) -> ExtractionResult<ExtractionSet> {
    debug!(sent_id = sentence.sent_id(), "extracting");

    let mut raw = Vec::new();
    for predicate in predicate_candidates(sentence) {
        raw.extend(extract_clause(sentence, predicate, config, 0)?);
    }
    let clausal: Vec<Extraction> = raw
        .into_iter()
        .filter_map(|e| finalize(sentence, config, e))
        .collect();

    let appositives: Vec<Extraction> = if config.appositive {
        synthesize_appositives(sentence)?
            .into_iter()
            .filter_map(|e| finalize(sentence, config, e))
            .collect()
    } else {
        Vec::new()
    };

    let mut set = ExtractionSet::new();
    for extraction in &clausal {
        set.insert(sentence, extraction.clone());
    }

    if config.appositive_transitivity_enabled() {
        // Single pass over the pre-transitivity set: inferred triples are
        // appended right after their source appositive and never trigger
        // further inference.
        let pre: Vec<Extraction> = clausal.iter().chain(appositives.iter()).cloned().collect();
        for appositive in &appositives {
            set.insert(sentence, appositive.clone());
            let source_form = appositive.tuple_form(sentence);
            let shared_subject = appositive.subject.text(sentence);
            for other in &pre {
                if other.tuple_form(sentence) == source_form {
                    continue;
                }
                if other.subject.text(sentence) != shared_subject {
                    continue;
                }
                let inferred = Extraction::new(
                    appositive.complement.clone(),
                    other.relation.clone(),
                    other.complement.clone(),
                    other.sub_extractions.clone(),
                    false,
                );
                if inferred.is_valid(sentence, config) {
                    set.insert(sentence, inferred);
                }
            }
        }
    } else {
        for appositive in appositives {
            set.insert(sentence, appositive);
        }
    }

    debug!(
        sent_id = sentence.sent_id(),
        extractions = set.len(),
        "extraction finished"
    );
    Ok(set)
}

/// Convenience wrapper owning a configuration.
pub struct TripleExtractor {
    config: ExtractorConfig,
}

impl TripleExtractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract triples from one sentence.
    pub fn extract(&self, sentence: &Sentence) -> ExtractionResult<ExtractionSet> {
        extract(sentence, &self.config)
    }
}

/// Verbal tokens that can head an independent proposition.
///
/// Auxiliaries of another verb, chained xcomp verbs, and subordinate
/// clause heads are reached through their governing predicate instead.
fn predicate_candidates(sentence: &Sentence) -> Vec<TokenId> {
    sentence
        .tokens()
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            t.is_verbal()
                && !matches!(
                    t.deprel,
                    DepRel::Aux
                        | DepRel::AuxPass
                        | DepRel::Xcomp
                        | DepRel::Ccomp
                        | DepRel::Advcl
                )
        })
        .map(|(id, _)| id)
        .collect()
}

/// Extract the propositions of the clause headed at `predicate`.
///
/// Returns zero extractions when no subject can be found or the relation
/// is not verbal; both are ordinary outcomes, not errors.
pub(crate) fn extract_clause(
    sentence: &Sentence,
    predicate: TokenId,
    config: &ExtractorConfig,
    depth: usize,
) -> ExtractionResult<Vec<Extraction>> {
    if depth > MAX_CLAUSE_DEPTH {
        return Err(ExtractionError::internal(
            sentence.sent_id(),
            "clause recursion exceeded the safe depth",
        ));
    }

    let (subject, hidden) = match find_subject(sentence, predicate, config, true)? {
        SubjectOutcome::Found(element) => (element, false),
        SubjectOutcome::Hidden => (TripleElement::empty(), true),
        SubjectOutcome::NotFound => {
            trace!("predicate {} has no subject, skipping", predicate + 1);
            return Ok(Vec::new());
        }
    };

    let relation = build_relation(sentence, predicate)?;
    if !relation_is_valid(&relation, sentence) {
        trace!("predicate {} has no verbal relation, skipping", predicate + 1);
        return Ok(Vec::new());
    }

    let mut group: Vec<Extraction> =
        complement_variants(sentence, predicate, &relation, &subject, config, depth)?
            .into_iter()
            .map(|variant| {
                Extraction::new(
                    subject.clone(),
                    relation.clone(),
                    variant.element,
                    variant.subs,
                    hidden,
                )
            })
            .collect();

    if config.coordinating_conjunctions {
        for peer in verbal_conj_peers(sentence, predicate) {
            let peer_relation = build_relation(sentence, peer)?;
            if !relation_is_valid(&peer_relation, sentence) {
                continue;
            }
            let variants =
                complement_variants(sentence, peer, &peer_relation, &subject, config, depth + 1)?;
            for variant in variants {
                group.push(Extraction::new(
                    subject.clone(),
                    peer_relation.clone(),
                    variant.element,
                    variant.subs,
                    hidden,
                ));
            }
        }
        redistribute_shared_complements(&mut group, sentence);
    }

    Ok(group)
}

/// Sanitize every element, recurse into sub-extractions, and keep the
/// extraction only if it is still valid.
fn finalize(
    sentence: &Sentence,
    config: &ExtractorConfig,
    mut extraction: Extraction,
) -> Option<Extraction> {
    sanitize_element(&mut extraction.subject, sentence);
    sanitize_element(&mut extraction.relation, sentence);
    sanitize_element(&mut extraction.complement, sentence);
    extraction.sub_extractions = std::mem::take(&mut extraction.sub_extractions)
        .into_iter()
        .filter_map(|sub| finalize(sentence, config, sub))
        .collect();
    extraction
        .is_valid(sentence, config)
        .then_some(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use copa_core::{MorphFeatures, Token, UPos};

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

    #[test]
    fn candidates_exclude_dependent_verb_forms() {
        // "Ele disse que iria viajar."
        let s = Sentence::new(
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
        .unwrap();
        assert_eq!(predicate_candidates(&s), vec![1]);
    }

    #[test]
    fn copulas_and_clause_modifiers_are_candidates() {
        // "O homem que comprou o carro é rico."
        let s = Sentence::new(
            "t",
            "O homem que comprou o carro é rico.",
            vec![
                tok(1, "O", UPos::DET, 2, "det"),
                tok(2, "homem", UPos::NOUN, 8, "nsubj"),
                tok(3, "que", UPos::PRON, 4, "nsubj"),
                tok(4, "comprou", UPos::VERB, 2, "acl:relcl"),
                tok(5, "o", UPos::DET, 6, "det"),
                tok(6, "carro", UPos::NOUN, 4, "obj"),
                tok(7, "é", UPos::AUX, 8, "cop"),
                tok(8, "rico", UPos::ADJ, 0, "root"),
                tok(9, ".", UPos::PUNCT, 8, "punct"),
            ],
        )
        .unwrap();
        assert_eq!(predicate_candidates(&s), vec![3, 6]);
    }

    #[test]
    fn subjectless_predicate_yields_nothing() {
        let s = Sentence::new(
            "t",
            "Correr.",
            vec![
                tok(1, "Correr", UPos::VERB, 0, "root"),
                tok(2, ".", UPos::PUNCT, 1, "punct"),
            ],
        )
        .unwrap();
        let set = extract(&s, &ExtractorConfig::default()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn sentence_without_predicates_yields_empty_set() {
        let s = Sentence::new(
            "t",
            "A casa.",
            vec![
                tok(1, "A", UPos::DET, 2, "det"),
                tok(2, "casa", UPos::NOUN, 0, "root"),
                tok(3, ".", UPos::PUNCT, 2, "punct"),
            ],
        )
        .unwrap();
        let set = extract(&s, &ExtractorConfig::full()).unwrap();
        assert!(set.is_empty());
    }
}
