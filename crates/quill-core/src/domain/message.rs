use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message entity - a contact-form enquiry from a visitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}
