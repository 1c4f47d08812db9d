//! Outbound mail implementations.

mod mailgun;

pub use mailgun::{MailgunConfig, MailgunMailer};

use async_trait::async_trait;

use quill_core::ports::{MailError, Mailer, OutboundEmail};

/// Fallback transport for when Mailgun is not configured: logs and drops.
pub struct LogOnlyMailer;

#[async_trait]
impl Mailer for LogOnlyMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        tracing::warn!(
            to = %email.to,
            subject = %email.subject,
            "Mail transport not configured - dropping outbound email"
        );
        Ok(())
    }

    async fn subscribe(&self, address: &str) -> Result<(), MailError> {
        tracing::warn!(address, "Mail transport not configured - dropping signup");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_transport_drops_email_without_error() {
        let email = OutboundEmail {
            to: "owner@example.com".to_owned(),
            from: "owner@example.com".to_owned(),
            subject: "Blog enquiry".to_owned(),
            text: "hello".to_owned(),
            html: None,
        };

        assert!(LogOnlyMailer.send(email).await.is_ok());
    }

    #[tokio::test]
    async fn unconfigured_transport_drops_signup_without_error() {
        assert!(LogOnlyMailer.subscribe("dave@example.com").await.is_ok());
    }
}
