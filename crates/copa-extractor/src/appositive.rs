//! Appositive synthesis: "is-a" triples with an injected copula.

use crate::dfs::{nominal_phrase, NominalOptions};
use crate::element::TripleElement;
use crate::error::ExtractionResult;
use crate::extraction::Extraction;
use copa_core::{DepRel, Sentence};
use tracing::trace;

/// Scan the sentence for `appos` dependents and synthesize one
/// (head; é; appositive) triple per occurrence.
///
/// Appositives whose head sits under `ccomp`/`xcomp` are skipped; those
/// would duplicate material already covered by the clausal extractions.
pub(crate) fn synthesize_appositives(sentence: &Sentence) -> ExtractionResult<Vec<Extraction>> {
    let mut extractions = Vec::new();
    for (id, token) in sentence.tokens().iter().enumerate() {
        if token.deprel != DepRel::Appos {
            continue;
        }
        let Some(head) = sentence.parent(id) else {
            continue;
        };
        if matches!(
            sentence.token(head).deprel,
            DepRel::Ccomp | DepRel::Xcomp
        ) {
            trace!("skipping appositive under a clausal complement");
            continue;
        }
        let subject = nominal_phrase(
            sentence,
            head,
            NominalOptions {
                as_subject: true,
                ignore_appos: true,
                ignore_conjunctions: false,
            },
        )?;
        let complement = nominal_phrase(sentence, id, NominalOptions::default())?;
        extractions.push(Extraction::new(
            subject,
            TripleElement::synthetic_copula(),
            complement,
            vec![],
            false,
        ));
    }
    Ok(extractions)
}
