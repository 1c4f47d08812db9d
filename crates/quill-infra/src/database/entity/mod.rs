//! SeaORM entities for the blog schema.

pub mod message;
pub mod page;
pub mod post;
pub mod tag;
pub mod user;
