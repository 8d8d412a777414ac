//! Universal Dependency relations.
//!
//! The extractor branches on a closed set of relations, several of which
//! carry UD subtypes (`nsubj:pass`, `aux:pass`, `acl:relcl`, `flat:name`,
//! `expl:pv`). Those subtypes change extraction behaviour, so they get
//! their own variants; any other subtype falls back to its base relation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependency relation of a token to its head.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum DepRel {
    /// Nominal subject
    Nsubj,
    /// Passive nominal subject
    NsubjPass,
    /// Clausal subject
    Csubj,
    /// Passive clausal subject
    CsubjPass,
    /// Direct object
    Obj,
    /// Indirect object
    Iobj,
    /// Oblique nominal
    Obl,
    /// Open clausal complement
    Xcomp,
    /// Clausal complement
    Ccomp,
    /// Adverbial clause modifier
    Advcl,
    /// Adverbial modifier
    Advmod,
    /// Nominal modifier
    Nmod,
    /// Adjectival modifier
    Amod,
    /// Numeric modifier
    Nummod,
    /// Determiner
    Det,
    /// Case marking
    Case,
    /// Coordinating conjunction
    Cc,
    /// Conjunct
    Conj,
    /// Copula
    Cop,
    /// Auxiliary
    Aux,
    /// Passive auxiliary
    AuxPass,
    /// Subordinating marker
    Mark,
    /// Appositive
    Appos,
    /// Clausal modifier of a noun
    Acl,
    /// Relative clause modifier
    AclRelcl,
    /// Flat multiword expression
    Flat,
    /// Flat name
    FlatName,
    /// Unspecified dependency
    Dep,
    /// Punctuation
    Punct,
    /// Pronominal clitic
    ExplPv,
    /// Expletive
    Expl,
    /// Root of the sentence
    Root,
    /// Other relation (kept verbatim)
    Other(String),
}

impl DepRel {
    /// The canonical UD relation string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Nsubj => "nsubj",
            Self::NsubjPass => "nsubj:pass",
            Self::Csubj => "csubj",
            Self::CsubjPass => "csubj:pass",
            Self::Obj => "obj",
            Self::Iobj => "iobj",
            Self::Obl => "obl",
            Self::Xcomp => "xcomp",
            Self::Ccomp => "ccomp",
            Self::Advcl => "advcl",
            Self::Advmod => "advmod",
            Self::Nmod => "nmod",
            Self::Amod => "amod",
            Self::Nummod => "nummod",
            Self::Det => "det",
            Self::Case => "case",
            Self::Cc => "cc",
            Self::Conj => "conj",
            Self::Cop => "cop",
            Self::Aux => "aux",
            Self::AuxPass => "aux:pass",
            Self::Mark => "mark",
            Self::Appos => "appos",
            Self::Acl => "acl",
            Self::AclRelcl => "acl:relcl",
            Self::Flat => "flat",
            Self::FlatName => "flat:name",
            Self::Dep => "dep",
            Self::Punct => "punct",
            Self::ExplPv => "expl:pv",
            Self::Expl => "expl",
            Self::Root => "root",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for DepRel {
    fn from(s: &str) -> Self {
        // Subtype-bearing relations the extractor distinguishes.
        match s {
            "nsubj:pass" => return Self::NsubjPass,
            "csubj:pass" => return Self::CsubjPass,
            "aux:pass" => return Self::AuxPass,
            "acl:relcl" => return Self::AclRelcl,
            "flat:name" => return Self::FlatName,
            "expl:pv" => return Self::ExplPv,
            _ => {}
        }

        // Any other subtype collapses to its base relation.
        let base = s.split(':').next().unwrap_or(s);
        match base {
            "nsubj" => Self::Nsubj,
            "csubj" => Self::Csubj,
            "obj" => Self::Obj,
            "iobj" => Self::Iobj,
            "obl" => Self::Obl,
            "xcomp" => Self::Xcomp,
            "ccomp" => Self::Ccomp,
            "advcl" => Self::Advcl,
            "advmod" => Self::Advmod,
            "nmod" => Self::Nmod,
            "amod" => Self::Amod,
            "nummod" => Self::Nummod,
            "det" => Self::Det,
            "case" => Self::Case,
            "cc" => Self::Cc,
            "conj" => Self::Conj,
            "cop" => Self::Cop,
            "aux" => Self::Aux,
            "mark" => Self::Mark,
            "appos" => Self::Appos,
            "acl" => Self::Acl,
            "flat" => Self::Flat,
            "dep" => Self::Dep,
            "punct" => Self::Punct,
            "expl" => Self::Expl,
            "root" => Self::Root,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for DepRel {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<DepRel> for String {
    fn from(rel: DepRel) -> Self {
        rel.as_str().to_string()
    }
}

impl fmt::Display for DepRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_relations() {
        assert_eq!(DepRel::from("nsubj"), DepRel::Nsubj);
        assert_eq!(DepRel::from("obj"), DepRel::Obj);
        assert_eq!(DepRel::from("root"), DepRel::Root);
    }

    #[test]
    fn keeps_meaningful_subtypes() {
        assert_eq!(DepRel::from("nsubj:pass"), DepRel::NsubjPass);
        assert_eq!(DepRel::from("aux:pass"), DepRel::AuxPass);
        assert_eq!(DepRel::from("acl:relcl"), DepRel::AclRelcl);
        assert_eq!(DepRel::from("flat:name"), DepRel::FlatName);
        assert_eq!(DepRel::from("expl:pv"), DepRel::ExplPv);
    }

    #[test]
    fn unknown_subtypes_collapse_to_base() {
        assert_eq!(DepRel::from("obl:agent"), DepRel::Obl);
        assert_eq!(DepRel::from("nmod:tmod"), DepRel::Nmod);
        assert_eq!(DepRel::from("acl:part"), DepRel::Acl);
    }

    #[test]
    fn unknown_relations_are_kept_verbatim() {
        let rel = DepRel::from("parataxis");
        assert_eq!(rel, DepRel::Other("parataxis".to_string()));
        assert_eq!(rel.as_str(), "parataxis");
    }

    #[test]
    fn serde_uses_relation_strings() {
        let json = serde_json::to_string(&DepRel::NsubjPass).unwrap();
        assert_eq!(json, "\"nsubj:pass\"");
        let back: DepRel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DepRel::NsubjPass);
    }
}
