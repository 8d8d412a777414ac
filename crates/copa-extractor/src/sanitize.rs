//! Span sanitization: trim edge punctuation and stray connectors.

use crate::element::TripleElement;
use copa_core::{DepRel, Sentence};

fn closing_of(open: &str) -> Option<&'static str> {
    match open {
        "(" => Some(")"),
        "[" => Some("]"),
        "{" => Some("}"),
        _ => None,
    }
}

fn opening_of(close: &str) -> Option<&'static str> {
    match close {
        ")" => Some("("),
        "]" => Some("["),
        "}" => Some("{"),
        _ => None,
    }
}

fn is_bracket(form: &str) -> bool {
    closing_of(form).is_some() || opening_of(form).is_some()
}

/// Trim a span in place.
///
/// 1. A bracket pair enclosing the whole span is dropped.
/// 2. Leading non-bracket punctuation and leading connectors are dropped.
/// 3. Trailing punctuation is dropped, except a closing bracket whose
///    opener survives inside the span.
pub(crate) fn sanitize_element(element: &mut TripleElement, sentence: &Sentence) {
    if element.is_synthetic() {
        return;
    }

    if element.len() >= 2 {
        if let (Some(first), Some(last)) = (element.first(), element.last()) {
            let opens = closing_of(&sentence.token(first).form);
            if opens.is_some() && opens == Some(sentence.token(last).form.as_str()) {
                element.remove(first);
                element.remove(last);
            }
        }
    }

    while let Some(first) = element.first() {
        let token = sentence.token(first);
        let droppable =
            (token.is_punct() && !is_bracket(&token.form)) || token.deprel == DepRel::Cc;
        if !droppable {
            break;
        }
        element.remove(first);
    }

    while let Some(last) = element.last() {
        let token = sentence.token(last);
        if !token.is_punct() {
            break;
        }
        if let Some(opener) = opening_of(&token.form) {
            let opener_inside = element
                .token_ids()
                .any(|id| id != last && sentence.token(id).form == opener);
            if opener_inside {
                break;
            }
        }
        element.remove(last);
    }
}
