//! Data Transfer Objects - request/response types for the API.
//!
//! Rich-text bodies and tag-ref arrays travel as opaque JSON; the server
//! validates and interprets them against the domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to register a new author account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    pub created_at: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub description: String,
    /// The editor's document tree, persisted verbatim.
    pub body: Value,
    /// Tag id references; numbers or numeric strings.
    #[serde(default)]
    pub tags: Value,
    /// "DRAFT" or "PUBLISHED".
    pub published: String,
}

/// Request to update a post. Same shape as create; the id comes from the path.
pub type UpdatePostRequest = CreatePostRequest;

/// A tag as rendered alongside a post or in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
    pub color: String,
}

/// A post with its author and resolved tags.
///
/// `tags` preserves the stored reference order; a reference that resolved to
/// nothing appears as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub body: Value,
    pub tags: Vec<Option<TagResponse>>,
    pub reading_time: String,
    pub published: String,
    pub author: AuthorResponse,
    pub created_at: String,
    pub updated_at: String,
}

/// The author block embedded in post and page responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// Request to update a static page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePageRequest {
    pub title: String,
    pub slug: String,
    pub body: Value,
}

/// A static page with its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: Value,
    pub author: AuthorResponse,
    pub created_at: String,
    pub updated_at: String,
}

/// Contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Mailing-list signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Identifier payload returned by the write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreatedResponse {
    pub id: i32,
    pub slug: String,
}
