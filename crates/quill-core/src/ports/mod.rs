//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod mailer;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use mailer::{MailError, Mailer, OutboundEmail};
pub use repository::{
    BaseRepository, MessageRepository, PageRepository, PostRepository, TagRepository,
    UserRepository,
};
