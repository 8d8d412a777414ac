//! Locating the logical subject of a predicate head.

use crate::config::ExtractorConfig;
use crate::deps;
use crate::dfs::{complement_phrase, nominal_phrase, NominalOptions};
use crate::element::TripleElement;
use crate::error::ExtractionResult;
use copa_core::{DepRel, Sentence, TokenId};
use tracing::trace;

/// Result of the subject search.
#[derive(Debug)]
pub(crate) enum SubjectOutcome {
    /// A subject span was located
    Found(TripleElement),
    /// No overt subject, but an empty subject is deliberately permitted
    Hidden,
    /// No subject; the extraction should be discarded
    NotFound,
}

/// Find the subject of the predicate headed at `predicate`.
///
/// Auxiliaries and copulas are first redirected to their head, so the
/// search always runs on the true predicate. When no subject dependent
/// exists, passive/existential objects and relative-clause heads are tried
/// before giving up. `allow_hidden` disables the hidden-subject path when
/// probing subordinate clauses.
pub(crate) fn find_subject(
    sentence: &Sentence,
    predicate: TokenId,
    config: &ExtractorConfig,
    allow_hidden: bool,
) -> ExtractionResult<SubjectOutcome> {
    let v = match sentence.token(predicate).deprel {
        DepRel::Aux | DepRel::AuxPass | DepRel::Cop => {
            sentence.parent(predicate).unwrap_or(predicate)
        }
        _ => predicate,
    };

    let subject_child = sentence
        .children(v)
        .iter()
        .copied()
        .find(|&c| deps::is_subject_dep(&sentence.token(c).deprel));

    if let Some(child) = subject_child {
        let token = sentence.token(child);
        if token.is_relative_pronoun() {
            // The real subject is the antecedent of the relative pronoun.
            return match sentence.parent(v) {
                Some(antecedent) => Ok(SubjectOutcome::Found(nominal_phrase(
                    sentence,
                    antecedent,
                    NominalOptions::subject(),
                )?)),
                None => {
                    trace!("relative pronoun without antecedent");
                    Ok(SubjectOutcome::NotFound)
                }
            };
        }
        let element = if matches!(token.deprel, DepRel::Csubj | DepRel::CsubjPass) {
            complement_phrase(sentence, child, false)?
        } else {
            nominal_phrase(sentence, child, NominalOptions::subject())?
        };
        return Ok(SubjectOutcome::Found(element));
    }

    // Passive and existential constructions promote the object.
    let passive = sentence
        .children(v)
        .iter()
        .any(|&c| sentence.token(c).deprel == DepRel::AuxPass);
    let existential = deps::EXISTENTIAL_VERB_LEMMAS.contains(&sentence.token(v).lemma.as_str());
    if passive || existential {
        if let Some(object) = sentence.child_by_dep(v, &DepRel::Obj) {
            return Ok(SubjectOutcome::Found(nominal_phrase(
                sentence,
                object,
                NominalOptions::subject(),
            )?));
        }
    }

    // A clause modifying a noun is predicated of that noun.
    if matches!(sentence.token(v).deprel, DepRel::Acl | DepRel::AclRelcl) {
        if let Some(head) = sentence.parent(v) {
            return Ok(SubjectOutcome::Found(nominal_phrase(
                sentence,
                head,
                NominalOptions::subject(),
            )?));
        }
    }

    if allow_hidden && (config.hidden_subjects || is_impersonal(sentence, v)) {
        return Ok(SubjectOutcome::Hidden);
    }
    Ok(SubjectOutcome::NotFound)
}

/// Third-person verb without any subject dependent.
fn is_impersonal(sentence: &Sentence, v: TokenId) -> bool {
    sentence.token(v).feats.person.as_deref() == Some("3")
}
