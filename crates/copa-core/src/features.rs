//! Morphological features from the CoNLL-U FEATS column.
//!
//! Only the features the extractor probes get typed fields (`PronType`,
//! `Person`, `Number`); everything else is kept verbatim so the writer can
//! round-trip a sentence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Morphological feature map for one token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MorphFeatures {
    /// Pronoun type (`Rel` marks relative pronouns)
    pub pron_type: Option<String>,
    /// Grammatical person
    pub person: Option<String>,
    /// Grammatical number
    pub number: Option<String>,
    /// Remaining features, keyed by UD feature name
    pub other: BTreeMap<String, String>,
}

impl MorphFeatures {
    /// Parse a FEATS field (`Key=Value|Key=Value`, `_` for none).
    pub fn parse(feats: &str) -> Self {
        let mut features = Self::default();
        if feats == "_" || feats.is_empty() {
            return features;
        }
        for feat in feats.split('|') {
            if let Some((key, value)) = feat.split_once('=') {
                match key {
                    "PronType" => features.pron_type = Some(value.to_string()),
                    "Person" => features.person = Some(value.to_string()),
                    "Number" => features.number = Some(value.to_string()),
                    _ => {
                        features.other.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }
        features
    }

    /// Whether no feature is set.
    pub fn is_empty(&self) -> bool {
        self.pron_type.is_none()
            && self.person.is_none()
            && self.number.is_none()
            && self.other.is_empty()
    }

    /// Whether a feature has a given value.
    pub fn has(&self, key: &str, value: &str) -> bool {
        match key {
            "PronType" => self.pron_type.as_deref() == Some(value),
            "Person" => self.person.as_deref() == Some(value),
            "Number" => self.number.as_deref() == Some(value),
            _ => self.other.get(key).map(String::as_str) == Some(value),
        }
    }

    /// Serialize back to a FEATS field, features sorted by name.
    pub fn to_feats_string(&self) -> String {
        if self.is_empty() {
            return "_".to_string();
        }
        let mut pairs: BTreeMap<&str, &str> = BTreeMap::new();
        if let Some(v) = &self.pron_type {
            pairs.insert("PronType", v);
        }
        if let Some(v) = &self.person {
            pairs.insert("Person", v);
        }
        if let Some(v) = &self.number {
            pairs.insert("Number", v);
        }
        for (k, v) in &self.other {
            pairs.insert(k, v);
        }
        pairs
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("|")
    }
}
