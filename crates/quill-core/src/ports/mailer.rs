//! Outbound transactional-email port.

use async_trait::async_trait;

/// A single outbound email.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    /// Falls back to the text body when absent.
    pub html: Option<String>,
}

/// Mail transport: contact-form notifications and mailing-list signups.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a single email.
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;

    /// Add an address to the mailing list.
    async fn subscribe(&self, address: &str) -> Result<(), MailError>;
}

/// Mail transport errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Mail provider rejected the request (status {status})")]
    Rejected { status: u16 },
}
