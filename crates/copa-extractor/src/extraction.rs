//! Extractions and the deduplicating extraction set.

use crate::config::ExtractorConfig;
use crate::element::TripleElement;
use copa_core::Sentence;
use indexmap::IndexMap;

/// A propositional triple (subject; relation; complement), possibly with
/// nested sub-extractions for subordinate clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The subject span
    pub subject: TripleElement,
    /// The relation span (verbal nucleus, or the synthetic copula)
    pub relation: TripleElement,
    /// The complement span
    pub complement: TripleElement,
    /// Propositions of subordinate clauses, in sentence order
    pub sub_extractions: Vec<Extraction>,
    /// Whether the empty subject was deliberately hidden
    pub(crate) hidden_subject: bool,
}

impl Extraction {
    pub(crate) fn new(
        subject: TripleElement,
        relation: TripleElement,
        complement: TripleElement,
        sub_extractions: Vec<Extraction>,
        hidden_subject: bool,
    ) -> Self {
        Self {
            subject,
            relation,
            complement,
            sub_extractions,
            hidden_subject,
        }
    }

    /// Canonical equality key: the sanitized rendering of the three
    /// elements plus the ordered tuple forms of the sub-extractions.
    pub fn tuple_form(&self, sentence: &Sentence) -> String {
        let mut form = format!(
            "({}; {}; {})",
            self.subject.text(sentence),
            self.relation.text(sentence),
            self.complement.text(sentence)
        );
        if !self.sub_extractions.is_empty() {
            let subs: Vec<String> = self
                .sub_extractions
                .iter()
                .map(|s| s.tuple_form(sentence))
                .collect();
            form.push_str(" [");
            form.push_str(&subs.join(", "));
            form.push(']');
        }
        form
    }

    /// Validity of a sanitized extraction.
    ///
    /// A pure wrapper — empty subject and empty relation — may stand as a
    /// container when at least one sub-extraction is valid. Anything else
    /// faces the full checks regardless of its sub-extractions: the
    /// subject must be non-empty (unless hidden subjects are permitted and
    /// this one was hidden), must not be a bare relative pronoun, and the
    /// relation must carry a sentence VERB/AUX or be synthetic.
    pub fn is_valid(&self, sentence: &Sentence, config: &ExtractorConfig) -> bool {
        if self.subject.is_empty()
            && self.relation.is_empty()
            && self
                .sub_extractions
                .iter()
                .any(|s| s.is_valid(sentence, config))
        {
            return true;
        }

        if self.subject.is_empty() {
            if !(config.hidden_subjects && self.hidden_subject) {
                return false;
            }
        } else if self.subject_is_bare_relative_pronoun(sentence) {
            return false;
        }

        if self.relation.is_empty() {
            return false;
        }
        if !self.relation.is_synthetic() && !self.relation.contains_verbal(sentence) {
            return false;
        }
        true
    }

    fn subject_is_bare_relative_pronoun(&self, sentence: &Sentence) -> bool {
        if self.subject.len() != 1 || self.subject.is_synthetic() {
            return false;
        }
        self.subject
            .first()
            .is_some_and(|id| sentence.token(id).is_relative_pronoun())
    }

    /// Render as `(arg1; rel; arg2)` with sub-extractions indented one
    /// level deeper.
    pub fn render(&self, sentence: &Sentence, indent: usize) -> String {
        let mut out = format!(
            "{}({}; {}; {})",
            "  ".repeat(indent),
            self.subject.text(sentence),
            self.relation.text(sentence),
            self.complement.text(sentence)
        );
        for sub in &self.sub_extractions {
            out.push('\n');
            out.push_str(&sub.render(sentence, indent + 1));
        }
        out
    }
}

/// Deduplicated set of extractions with deterministic order.
///
/// Keyed by tuple form; the first occurrence wins, insertion order is the
/// rendering order.
#[derive(Debug, Clone, Default)]
pub struct ExtractionSet {
    inner: IndexMap<String, Extraction>,
}

impl ExtractionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an extraction; returns false for duplicates.
    pub fn insert(&mut self, sentence: &Sentence, extraction: Extraction) -> bool {
        let key = extraction.tuple_form(sentence);
        if self.inner.contains_key(&key) {
            return false;
        }
        self.inner.insert(key, extraction);
        true
    }

    /// Extractions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Extraction> {
        self.inner.values()
    }

    /// Tuple forms in insertion order.
    pub fn tuple_forms(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Number of extractions.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Render one line per extraction, sub-extractions indented.
    pub fn render(&self, sentence: &Sentence) -> String {
        self.inner
            .values()
            .map(|e| e.render(sentence, 0))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copa_core::{DepRel, MorphFeatures, Token, UPos};

    fn sentence() -> Sentence {
        let specs: [(&str, UPos, u32, &str, &str); 4] = [
            ("que", UPos::PRON, 3, "nsubj", "PronType=Rel"),
            ("ele", UPos::PRON, 3, "obj", "_"),
            ("correu", UPos::VERB, 0, "root", "_"),
            ("rápido", UPos::ADV, 3, "advmod", "_"),
        ];
        let tokens = specs
            .iter()
            .enumerate()
            .map(|(i, (form, upos, head, deprel, feats))| Token {
                id: i as u32 + 1,
                form: form.to_string(),
                lemma: form.to_string(),
                upos: *upos,
                xpos: None,
                feats: MorphFeatures::parse(feats),
                head: *head,
                deprel: DepRel::from(*deprel),
            })
            .collect();
        Sentence::new("t", "que ele correu rápido", tokens).unwrap()
    }

    fn extraction(subject: TripleElement, relation: TripleElement) -> Extraction {
        Extraction::new(subject, relation, TripleElement::empty(), vec![], false)
    }

    #[test]
    fn valid_extraction_has_subject_and_verbal_relation() {
        let s = sentence();
        let e = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        assert!(e.is_valid(&s, &ExtractorConfig::default()));
    }

    #[test]
    fn bare_relative_pronoun_subject_is_invalid() {
        let s = sentence();
        let e = extraction(TripleElement::from_token(0), TripleElement::from_token(2));
        assert!(!e.is_valid(&s, &ExtractorConfig::default()));
    }

    #[test]
    fn empty_subject_needs_hidden_flag_and_config() {
        let s = sentence();
        let mut e = extraction(TripleElement::empty(), TripleElement::from_token(2));
        assert!(!e.is_valid(&s, &ExtractorConfig::default()));
        assert!(!e.is_valid(&s, &ExtractorConfig::full()));
        e.hidden_subject = true;
        assert!(!e.is_valid(&s, &ExtractorConfig::default()));
        assert!(e.is_valid(&s, &ExtractorConfig::full()));
    }

    #[test]
    fn non_verbal_relation_is_invalid_unless_synthetic() {
        let s = sentence();
        let e = extraction(TripleElement::from_token(1), TripleElement::from_token(3));
        assert!(!e.is_valid(&s, &ExtractorConfig::default()));
        let e = extraction(TripleElement::from_token(1), TripleElement::synthetic_copula());
        assert!(e.is_valid(&s, &ExtractorConfig::default()));
    }

    #[test]
    fn container_with_valid_sub_stands() {
        let s = sentence();
        let sub = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        let container = Extraction::new(
            TripleElement::empty(),
            TripleElement::empty(),
            TripleElement::empty(),
            vec![sub],
            false,
        );
        assert!(container.is_valid(&s, &ExtractorConfig::default()));
    }

    #[test]
    fn sub_extractions_do_not_excuse_a_disallowed_hidden_subject() {
        let s = sentence();
        let sub = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        // empty subject but a real relation: not a container, so the
        // subject checks still apply
        let mut parent = Extraction::new(
            TripleElement::empty(),
            TripleElement::from_token(2),
            TripleElement::empty(),
            vec![sub],
            true,
        );
        assert!(!parent.is_valid(&s, &ExtractorConfig::default()));
        let hidden_allowed = ExtractorConfig {
            hidden_subjects: true,
            subordinating_conjunctions: true,
            ..Default::default()
        };
        assert!(parent.is_valid(&s, &hidden_allowed));
        parent.hidden_subject = false;
        assert!(!parent.is_valid(&s, &hidden_allowed));
    }

    #[test]
    fn sub_extractions_do_not_excuse_a_bare_relative_pronoun_subject() {
        let s = sentence();
        let sub = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        let parent = Extraction::new(
            TripleElement::from_token(0),
            TripleElement::from_token(2),
            TripleElement::empty(),
            vec![sub],
            false,
        );
        assert!(!parent.is_valid(&s, &ExtractorConfig::full()));
    }

    #[test]
    fn sub_extractions_do_not_excuse_a_non_verbal_relation() {
        let s = sentence();
        let sub = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        let parent = Extraction::new(
            TripleElement::from_token(1),
            TripleElement::from_token(3),
            TripleElement::empty(),
            vec![sub],
            false,
        );
        assert!(!parent.is_valid(&s, &ExtractorConfig::full()));
    }

    #[test]
    fn tuple_form_includes_sub_extractions() {
        let s = sentence();
        let sub = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        let mut parent = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        parent.sub_extractions.push(sub);
        assert_eq!(
            parent.tuple_form(&s),
            "(ele; correu; ) [(ele; correu; )]"
        );
    }

    #[test]
    fn set_deduplicates_and_keeps_first_occurrence_order() {
        let s = sentence();
        let mut set = ExtractionSet::new();
        let a = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        let mut b = extraction(TripleElement::from_token(1), TripleElement::from_token(2));
        b.complement = TripleElement::from_token(3);
        assert!(set.insert(&s, a.clone()));
        assert!(set.insert(&s, b));
        assert!(!set.insert(&s, a));
        assert_eq!(set.len(), 2);
        let forms: Vec<&str> = set.tuple_forms().collect();
        assert_eq!(forms, vec!["(ele; correu; )", "(ele; correu; rápido)"]);
    }
}
