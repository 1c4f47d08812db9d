use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page entity - static content (About, etc.) with the same rich-text body
/// as a post but no tags or publication status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub slug: String,
    pub body: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(user_id: i32, title: String, slug: String, body: Value) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title,
            slug,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}
