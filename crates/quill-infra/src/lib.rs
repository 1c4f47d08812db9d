//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! PostgreSQL repositories via SeaORM, JWT + Argon2 authentication, and the
//! Mailgun outbound mail transport.

pub mod auth;
pub mod database;
pub mod mail;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, connect};
pub use mail::{LogOnlyMailer, MailgunConfig, MailgunMailer};
