//! Reading-time estimation over a document tree.

use super::Document;

const WORDS_PER_MINUTE: f64 = 200.0;

/// Derive the human-readable reading-time label for a document.
///
/// All leaf text is counted regardless of nesting depth and divided by a
/// 200 wpm reading speed. Whole minutes (including the empty document) render
/// as `"N min read"`; if the fractional remainder exceeds 30 seconds the
/// minutes round to the nearest integer, otherwise a one-decimal label is
/// produced.
pub fn reading_time(doc: &Document) -> String {
    let minutes = doc.word_count() as f64 / WORDS_PER_MINUTE;
    let remainder_secs = minutes.fract() * 60.0;

    if minutes.fract() == 0.0 {
        format!("{} min read", minutes as u64)
    } else if remainder_secs > 30.0 {
        format!("{} min read", minutes.round() as u64)
    } else {
        format!("{minutes:.1} min read")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_words(n: usize) -> Document {
        let words = vec!["word"; n].join(" ");
        Document::from_value(&json!({
            "type": "doc",
            "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": words }] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn empty_document_yields_minimal_label() {
        assert_eq!(reading_time(&Document::default()), "0 min read");
    }

    #[test]
    fn exactly_two_hundred_words_is_one_minute() {
        assert_eq!(reading_time(&doc_with_words(200)), "1 min read");
    }

    #[test]
    fn small_remainder_keeps_one_decimal() {
        // 250 words = 1.25 min, 15s past the minute
        assert_eq!(reading_time(&doc_with_words(250)), "1.2 min read");
    }

    #[test]
    fn large_remainder_rounds_up() {
        // 350 words = 1.75 min, 45s past the minute
        assert_eq!(reading_time(&doc_with_words(350)), "2 min read");
    }

    #[test]
    fn counts_deeply_nested_text() {
        let doc = Document::from_value(&json!({
            "type": "doc",
            "content": [{
                "type": "bulletList",
                "content": [{
                    "type": "listItem",
                    "content": [{
                        "type": "paragraph",
                        "content": [{ "type": "text", "text": vec!["w"; 400].join(" ") }]
                    }]
                }]
            }]
        }))
        .unwrap();

        assert_eq!(reading_time(&doc), "2 min read");
    }
}
