use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    /// Parse the wire representation used by the editor forms.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DRAFT" => Some(Self::Draft),
            "PUBLISHED" => Some(Self::Published),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
        }
    }
}

/// A reference to a tag stored on a post.
///
/// The editor persists tag ids as a JSON array whose elements may be numbers
/// or numeric strings; both forms occur in stored data and must round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Id(i32),
    Text(String),
}

impl TagRef {
    /// The numeric tag id, if this reference carries one.
    pub fn id(&self) -> Option<i32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Post entity - a blog post with rich-text body and derived reading time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// The document tree, persisted verbatim as JSON.
    pub body: Value,
    pub tags: Vec<TagRef>,
    pub reading_time: String,
    pub published: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unsaved post. An id of zero means the database has not
    /// assigned one yet.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: i32,
        title: String,
        slug: String,
        description: String,
        body: Value,
        tags: Vec<TagRef>,
        reading_time: String,
        published: PostStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title,
            slug,
            description,
            body,
            tags,
            reading_time,
            published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the post references the given tag id.
    pub fn has_tag(&self, tag_id: i32) -> bool {
        self.tags.iter().any(|t| t.id() == Some(tag_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_refs_parse_numbers_and_strings() {
        let refs: Vec<TagRef> = serde_json::from_value(json!([3, "1", "nope"])).unwrap();

        assert_eq!(refs[0].id(), Some(3));
        assert_eq!(refs[1].id(), Some(1));
        assert_eq!(refs[2].id(), None);
    }

    #[test]
    fn tag_refs_round_trip_verbatim() {
        let raw = json!(["2", 7]);
        let refs: Vec<TagRef> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&refs).unwrap(), raw);
    }

    #[test]
    fn status_parses_wire_values() {
        assert_eq!(PostStatus::parse("DRAFT"), Some(PostStatus::Draft));
        assert_eq!(PostStatus::parse("PUBLISHED"), Some(PostStatus::Published));
        assert_eq!(PostStatus::parse("draft"), None);
    }
}
