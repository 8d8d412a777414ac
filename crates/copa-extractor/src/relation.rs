//! Assembling the relation: the verbal nucleus with auxiliaries, clitics,
//! and a small set of adverbs.

use crate::deps;
use crate::element::TripleElement;
use crate::error::{ExtractionError, ExtractionResult};
use copa_core::{DepRel, Sentence, TokenId};
use std::collections::HashSet;

/// The predicate the relation is anchored on: a copula is redirected to
/// its head (the predicate nominal), anything else stands for itself.
pub(crate) fn effective_verb(sentence: &Sentence, start: TokenId) -> TokenId {
    if sentence.token(start).deprel == DepRel::Cop {
        sentence.parent(start).unwrap_or(start)
    } else {
        start
    }
}

/// Build the relation element rooted at `start`.
///
/// The walk starts from the effective verb and absorbs chained verbal
/// dependents (`aux`, `aux:pass`, `xcomp`), pronominal clitics, and the
/// closed list of relation adverbs. Nothing else is descended into.
pub(crate) fn build_relation(
    sentence: &Sentence,
    start: TokenId,
) -> ExtractionResult<TripleElement> {
    let effective = effective_verb(sentence, start);
    let mut element = TripleElement::from_token(start);
    let mut visited: HashSet<TokenId> = HashSet::from([start, effective]);
    let mut stack = vec![effective];

    while let Some(current) = stack.pop() {
        for &child in sentence.children(current) {
            let token = sentence.token(child);
            let include = (deps::is_relation_verb_dep(&token.deprel) && token.is_verbal())
                || deps::is_relation_modifier_dep(&token.deprel)
                || (token.deprel == DepRel::Advmod
                    && deps::RELATION_ADVERB_LEMMAS.contains(&token.lemma.as_str()));
            if !include {
                continue;
            }
            if !visited.insert(child) {
                return Err(ExtractionError::internal(
                    sentence.sent_id(),
                    format!("token {} revisited during relation walk", child + 1),
                ));
            }
            element.add(child);
            stack.push(child);
        }
    }
    Ok(element)
}

/// A usable relation carries a sentence VERB/AUX or is synthetic.
pub(crate) fn relation_is_valid(element: &TripleElement, sentence: &Sentence) -> bool {
    !element.is_empty() && (element.is_synthetic() || element.contains_verbal(sentence))
}
