//! Closed dependency-label groupings the extraction rules branch on.
//!
//! These are design-level constants for Portuguese UD v2 trees: which
//! relations introduce subjects, which extend a verbal nucleus, which open
//! complements, and where a subtree traversal must stop.

use copa_core::DepRel;

/// Relations that introduce a subject.
pub fn is_subject_dep(rel: &DepRel) -> bool {
    matches!(
        rel,
        DepRel::Nsubj | DepRel::NsubjPass | DepRel::Csubj | DepRel::CsubjPass
    )
}

/// Relations whose verbal children extend the relation nucleus.
pub fn is_relation_verb_dep(rel: &DepRel) -> bool {
    matches!(rel, DepRel::Aux | DepRel::AuxPass | DepRel::Xcomp)
}

/// Non-verbal relation modifiers (pronominal clitics).
pub fn is_relation_modifier_dep(rel: &DepRel) -> bool {
    matches!(rel, DepRel::ExplPv)
}

/// Relations that open a complement head.
pub fn is_complement_head_dep(rel: &DepRel) -> bool {
    matches!(
        rel,
        DepRel::Obj
            | DepRel::Iobj
            | DepRel::Xcomp
            | DepRel::Obl
            | DepRel::Advmod
            | DepRel::Nmod
            | DepRel::Root
    )
}

/// Relations whose subtrees the complement walk skips entirely.
pub fn is_complement_ignore_dep(rel: &DepRel) -> bool {
    is_subject_dep(rel)
}

/// Relations that terminate a complement walk without being included.
pub fn is_complement_boundary_dep(rel: &DepRel) -> bool {
    matches!(rel, DepRel::Mark)
}

/// Relations a nominal-phrase walk descends into.
pub fn is_nominal_dfs_dep(rel: &DepRel) -> bool {
    matches!(
        rel,
        DepRel::Nummod
            | DepRel::Advmod
            | DepRel::Nmod
            | DepRel::Amod
            | DepRel::Dep
            | DepRel::Det
            | DepRel::Case
            | DepRel::Flat
            | DepRel::FlatName
            | DepRel::Punct
            | DepRel::Conj
            | DepRel::Cc
            | DepRel::Appos
    )
}

/// Relations that open a subordinate clause.
pub fn is_subordinate_clause_dep(rel: &DepRel) -> bool {
    matches!(rel, DepRel::Ccomp | DepRel::Advcl)
}

/// Adverb lemmas absorbed into the relation nucleus.
pub const RELATION_ADVERB_LEMMAS: &[&str] = &["não", "já", "ainda", "também", "nunca"];

/// Verb lemmas of existential constructions whose object is the logical
/// subject.
pub const EXISTENTIAL_VERB_LEMMAS: &[&str] = &["haver", "ocorrer", "existir"];
