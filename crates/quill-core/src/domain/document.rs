use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// A node in the rich-text document tree.
///
/// The editor stores content as a recursive JSON structure: every node has a
/// type tag, optional attributes, and either nested child nodes or literal
/// leaf text. The tree is persisted verbatim; this type only models the shape
/// the derived-metadata code needs to walk it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Document>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Document {
    /// Parse a stored JSON body into a document tree.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        serde_json::from_value(value.clone())
            .map_err(|e| DomainError::Validation(format!("invalid document body: {e}")))
    }

    /// Collect the literal text of every leaf, depth-first, joined by spaces.
    pub fn leaf_text(&self) -> String {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves.join(" ")
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(text) = &self.text {
            out.push(text);
        }
        if let Some(children) = &self.content {
            for child in children {
                child.collect_leaves(out);
            }
        }
    }

    /// Approximate word count: leaf text split on whitespace.
    pub fn word_count(&self) -> usize {
        self.leaf_text().split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::from_value(&value).unwrap()
    }

    #[test]
    fn collects_leaf_text_at_any_depth() {
        let d = doc(json!({
            "type": "doc",
            "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": "hello world" }] },
                {
                    "type": "blockquote",
                    "content": [
                        { "type": "paragraph", "content": [{ "type": "text", "text": "nested" }] }
                    ]
                }
            ]
        }));

        assert_eq!(d.leaf_text(), "hello world nested");
        assert_eq!(d.word_count(), 3);
    }

    #[test]
    fn empty_document_has_no_words() {
        let d = doc(json!({ "type": "doc" }));
        assert_eq!(d.word_count(), 0);
    }

    #[test]
    fn attrs_are_preserved_through_round_trip() {
        let original = json!({
            "type": "doc",
            "content": [
                { "type": "heading", "attrs": { "level": 2 },
                  "content": [{ "type": "text", "text": "Title" }] }
            ]
        });

        let d = doc(original.clone());
        assert_eq!(serde_json::to_value(&d).unwrap(), original);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = Document::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
