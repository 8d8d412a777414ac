//! CoNLL-U writer.
//!
//! Serializes sentences back to ten-column blocks. Fields the model does
//! not carry (DEPS, MISC) are written as `_`.

use copa_core::Sentence;
use std::fmt::Write as _;

/// Serialize one sentence as a CoNLL-U block (without trailing blank line).
pub fn write_sentence(sentence: &Sentence) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# sent_id = {}", sentence.sent_id());
    let _ = writeln!(out, "# text = {}", sentence.text());
    for token in sentence.tokens() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t_\t_",
            token.id,
            token.form,
            token.lemma,
            token.upos,
            token.xpos.as_deref().unwrap_or("_"),
            token.feats.to_feats_string(),
            token.head,
            token.deprel,
        );
    }
    out
}

/// Serialize a document: blocks separated by blank lines.
pub fn write_document(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(write_sentence)
        .collect::<Vec<_>>()
        .join("\n")
}
