//! The three rendering formats: structured JSON, tabular, plain text.

use crate::record::{ExtractionRecord, SentenceRecord};
use crate::{OutputError, OutputResult};
use std::fmt::Write as _;

/// Structured JSON: one object per sentence.
pub fn to_json(records: &[SentenceRecord]) -> OutputResult<String> {
    serde_json::to_string_pretty(records).map_err(OutputError::from)
}

/// Tabular rendering: `id, sentence, arg1, rel, arg2` with hierarchical
/// ids (`1`, `1.1`, `1.2`) for sub-extractions, tab-separated.
pub fn to_tabular(records: &[SentenceRecord]) -> String {
    let mut out = String::from("id\tsentence\targ1\trel\targ2\n");
    for record in records {
        for (index, extraction) in record.extractions.iter().enumerate() {
            write_tabular_row(
                &mut out,
                &format!("{}", index + 1),
                &record.sentence,
                extraction,
            );
        }
    }
    out
}

fn write_tabular_row(out: &mut String, id: &str, sentence: &str, record: &ExtractionRecord) {
    let _ = writeln!(
        out,
        "{id}\t{sentence}\t{}\t{}\t{}",
        record.arg1, record.rel, record.arg2
    );
    for (index, sub) in record.sub_extractions.iter().enumerate() {
        write_tabular_row(out, &format!("{id}.{}", index + 1), sentence, sub);
    }
}

/// Plain text: the sentence line followed by one `(arg1; rel; arg2)` line
/// per extraction, sub-extractions indented.
pub fn to_text(records: &[SentenceRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", record.sentence);
        for extraction in &record.extractions {
            write_text_line(&mut out, extraction, 1);
        }
    }
    out
}

fn write_text_line(out: &mut String, record: &ExtractionRecord, indent: usize) {
    let _ = writeln!(
        out,
        "{}({}; {}; {})",
        "  ".repeat(indent),
        record.arg1,
        record.rel,
        record.arg2
    );
    for sub in &record.sub_extractions {
        write_text_line(out, sub, indent + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SentenceRecord> {
        vec![SentenceRecord {
            id: "s1".to_string(),
            sentence: "Ele disse que o menino chegou.".to_string(),
            extractions: vec![ExtractionRecord {
                arg1: "Ele".to_string(),
                rel: "disse".to_string(),
                arg2: "que".to_string(),
                sub_extractions: vec![ExtractionRecord {
                    arg1: "o menino".to_string(),
                    rel: "chegou".to_string(),
                    arg2: String::new(),
                    sub_extractions: vec![],
                }],
            }],
        }]
    }

    #[test]
    fn json_carries_the_nested_structure() {
        let json = to_json(&records()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "s1");
        assert_eq!(value[0]["extractions"][0]["arg1"], "Ele");
        assert_eq!(
            value[0]["extractions"][0]["sub_extractions"][0]["rel"],
            "chegou"
        );
    }

    #[test]
    fn tabular_uses_hierarchical_ids() {
        let table = to_tabular(&records());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id\tsentence\targ1\trel\targ2");
        assert!(lines[1].starts_with("1\tEle disse que o menino chegou.\tEle\tdisse\tque"));
        assert!(lines[2].starts_with("1.1\tEle disse que o menino chegou.\to menino\tchegou\t"));
    }

    #[test]
    fn text_indents_sub_extractions() {
        let text = to_text(&records());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ele disse que o menino chegou.");
        assert_eq!(lines[1], "  (Ele; disse; que)");
        assert_eq!(lines[2], "    (o menino; chegou; )");
    }
}
