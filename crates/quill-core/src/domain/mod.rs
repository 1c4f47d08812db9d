//! Domain entities and the derived-metadata logic built on them.

mod document;
mod message;
mod page;
mod post;
mod tag;
mod user;

pub mod reading_time;
pub mod validate;
pub mod visibility;

pub use document::Document;
pub use message::Message;
pub use page::Page;
pub use post::{Post, PostStatus, TagRef};
pub use tag::{Tag, resolve_tags};
pub use user::User;
pub use visibility::Viewer;
