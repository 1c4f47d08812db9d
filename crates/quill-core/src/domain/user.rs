use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - an author account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub profile_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unsaved user with generated timestamps.
    pub fn new(username: String, password_hash: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            username,
            password_hash,
            name,
            profile_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
