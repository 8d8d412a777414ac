//! Shared builders for extraction tests.

use copa_core::{DepRel, MorphFeatures, Sentence, Token, UPos};

/// Build a token from a compact description.
pub fn tok(id: u32, form: &str, lemma: &str, upos: UPos, head: u32, deprel: &str, feats: &str) -> Token {
    Token {
        id,
        form: form.to_string(),
        lemma: lemma.to_string(),
        upos,
        xpos: None,
        feats: MorphFeatures::parse(feats),
        head,
        deprel: DepRel::from(deprel),
    }
}

/// Build a sentence, panicking on malformed test data.
pub fn sentence(text: &str, tokens: Vec<Token>) -> Sentence {
    Sentence::new("test", text, tokens).expect("well-formed test sentence")
}
