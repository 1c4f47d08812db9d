use async_trait::async_trait;

use crate::domain::{Message, Page, Post, Tag, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with the query shapes the listing routes need.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Find a post by its unique slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// The most recent posts regardless of status, newest first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Every post, newest first. Visibility is applied by the caller.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;
}

/// Page repository.
#[async_trait]
pub trait PageRepository: BaseRepository<Page, i32> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, RepoError>;
}

/// Tag repository. The catalog is admin-curated and read-only here.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    /// The full catalog, name ascending.
    async fn list_all(&self) -> Result<Vec<Tag>, RepoError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Contact message repository.
#[async_trait]
pub trait MessageRepository: BaseRepository<Message, i32> {}
