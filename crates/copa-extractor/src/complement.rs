//! Complement extraction: head identification, coordination of complement
//! spans, and recursion into subordinate clauses.

use crate::config::ExtractorConfig;
use crate::deps;
use crate::dfs::{complement_phrase, nominal_phrase, NominalOptions};
use crate::element::TripleElement;
use crate::error::ExtractionResult;
use crate::extraction::Extraction;
use crate::extractor::extract_clause;
use crate::sanitize::sanitize_element;
use crate::subject::{find_subject, SubjectOutcome};
use copa_core::{DepRel, Sentence, TokenId};
use std::collections::HashSet;

/// One candidate complement for an extraction, with the sub-extractions a
/// subordinate clause contributed.
pub(crate) struct ComplementVariant {
    pub element: TripleElement,
    pub subs: Vec<Extraction>,
}

impl ComplementVariant {
    fn plain(element: TripleElement) -> Self {
        Self {
            element,
            subs: Vec::new(),
        }
    }
}

/// Produce the complements for a predicate whose relation has been built.
///
/// Every complement head yields at least one variant; coordinated heads
/// yield the combined span and, when conjunct splitting is enabled, one
/// span per conjunct. A predicate without complement heads yields a single
/// empty variant.
pub(crate) fn complement_variants(
    sentence: &Sentence,
    predicate: TokenId,
    relation: &TripleElement,
    subject: &TripleElement,
    config: &ExtractorConfig,
    depth: usize,
) -> ExtractionResult<Vec<ComplementVariant>> {
    let mut variants = Vec::new();
    for head in complement_heads(sentence, predicate, relation, subject) {
        if deps::is_subordinate_clause_dep(&sentence.token(head).deprel) {
            variants.push(subordinate_variant(sentence, head, config, depth)?);
        } else {
            for element in coordinated_spans(sentence, head, config)? {
                variants.push(ComplementVariant::plain(element));
            }
        }
    }
    if variants.is_empty() {
        variants.push(ComplementVariant::plain(TripleElement::empty()));
    }
    Ok(variants)
}

/// Complement heads in sentence order.
///
/// For a copula the predicate nominal is itself a head, followed by its
/// dependents; otherwise heads are dependents of the verbal nucleus.
/// Tokens already absorbed into the relation or promoted into the subject
/// are not heads.
fn complement_heads(
    sentence: &Sentence,
    predicate: TokenId,
    relation: &TripleElement,
    subject: &TripleElement,
) -> Vec<TokenId> {
    let mut heads = Vec::new();
    let candidate = |c: TokenId| {
        deps::is_complement_head_dep(&sentence.token(c).deprel)
            && !relation.contains(c)
            && !subject.contains(c)
    };

    if sentence.token(predicate).deprel == DepRel::Cop {
        let nominal = sentence.parent(predicate).unwrap_or(predicate);
        heads.push(nominal);
        heads.extend(sentence.children(nominal).iter().copied().filter(|&c| candidate(c)));
    } else {
        for member in relation.token_ids() {
            if !sentence.token(member).is_verbal() {
                continue;
            }
            heads.extend(sentence.children(member).iter().copied().filter(|&c| candidate(c)));
        }
    }
    heads.sort_unstable();
    heads.dedup();
    heads
}

/// A ccomp/advcl head: either a nested proposition (when it has an overt
/// subject and sub-extraction emission is on) or a plain span that keeps
/// its subordinating marker.
fn subordinate_variant(
    sentence: &Sentence,
    head: TokenId,
    config: &ExtractorConfig,
    depth: usize,
) -> ExtractionResult<ComplementVariant> {
    if config.subordinating_conjunctions {
        if let SubjectOutcome::Found(sub_subject) = find_subject(sentence, head, config, false)? {
            if !sub_subject.is_empty() {
                let subs = extract_clause(sentence, head, config, depth + 1)?;
                if !subs.is_empty() {
                    let element = match sentence.child_by_dep(head, &DepRel::Mark) {
                        Some(mark) => TripleElement::from_token(mark),
                        None => TripleElement::empty(),
                    };
                    return Ok(ComplementVariant { element, subs });
                }
            }
        }
    }

    let mut element = complement_phrase(sentence, head, false)?;
    if let Some(mark) = sentence.child_by_dep(head, &DepRel::Mark) {
        element.add(mark);
    }
    Ok(ComplementVariant::plain(element))
}

/// Spans for a non-subordinate head and its `conj` chain.
///
/// Returns the combined span first; with conjunct splitting enabled, the
/// per-conjunct spans follow. A conjunct without its own preposition
/// borrows the leading preposition of the first conjunct.
fn coordinated_spans(
    sentence: &Sentence,
    head: TokenId,
    config: &ExtractorConfig,
) -> ExtractionResult<Vec<TripleElement>> {
    let broad = matches!(
        sentence.token(head).deprel,
        DepRel::Xcomp | DepRel::Advmod
    );
    let head_span = if broad {
        complement_phrase(sentence, head, true)?
    } else {
        nominal_phrase(
            sentence,
            head,
            NominalOptions {
                ignore_conjunctions: true,
                ..Default::default()
            },
        )?
    };

    let peers = conj_chain(sentence, head);
    if peers.is_empty() {
        return Ok(vec![head_span]);
    }

    let head_case = sentence.child_by_dep(head, &DepRel::Case);
    let mut combined = head_span.clone();
    let mut peer_spans = Vec::new();
    for &peer in &peers {
        let raw = nominal_phrase(
            sentence,
            peer,
            NominalOptions {
                ignore_conjunctions: true,
                ..Default::default()
            },
        )?;
        combined.extend(&raw);

        let mut span = raw;
        sanitize_element(&mut span, sentence);
        if sentence.child_by_dep(peer, &DepRel::Case).is_none() {
            if let Some(case) = head_case {
                span.add(case);
            }
        }
        peer_spans.push(span);
    }
    for &node in std::iter::once(&head).chain(peers.iter()) {
        for cc in sentence.children_by_dep(node, &DepRel::Cc) {
            combined.add(cc);
        }
    }

    let mut spans = vec![combined];
    if config.coordinating_conjunctions {
        spans.push(head_span);
        spans.extend(peer_spans);
    }
    Ok(spans)
}

/// Transitive closure of `conj` dependents, in sentence order.
fn conj_chain(sentence: &Sentence, head: TokenId) -> Vec<TokenId> {
    let mut peers = Vec::new();
    let mut seen: HashSet<TokenId> = HashSet::from([head]);
    let mut stack = vec![head];
    while let Some(current) = stack.pop() {
        for peer in sentence.children_by_dep(current, &DepRel::Conj) {
            if seen.insert(peer) {
                peers.push(peer);
                stack.push(peer);
            }
        }
    }
    peers.sort_unstable();
    peers
}
