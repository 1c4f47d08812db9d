//! Mailgun mail transport.
//!
//! Single-message delivery goes through `POST /v3/{domain}/messages`;
//! mailing-list signups through `POST /v3/lists/{list}/members`. Both
//! authenticate with HTTP basic auth, user `api`.

use async_trait::async_trait;

use quill_core::ports::{MailError, Mailer, OutboundEmail};

const API_BASE: &str = "https://api.mailgun.net/v3";

/// Mailgun transport configuration.
#[derive(Debug, Clone)]
pub struct MailgunConfig {
    pub domain: String,
    pub sending_key: String,
    /// Mailing-list address, e.g. `news@mg.example.com`.
    pub list_address: String,
}

/// Mailgun-backed mail transport.
pub struct MailgunMailer {
    client: reqwest::Client,
    config: MailgunConfig,
}

impl MailgunMailer {
    pub fn new(config: MailgunConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let html = email.html.unwrap_or_else(|| email.text.clone());
        let form = [
            ("to", email.to.as_str()),
            ("from", email.from.as_str()),
            ("subject", email.subject.as_str()),
            ("text", email.text.as_str()),
            ("html", html.as_str()),
        ];

        let response = self
            .client
            .post(format!("{API_BASE}/{}/messages", self.config.domain))
            .basic_auth("api", Some(&self.config.sending_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MailError::Rejected {
                status: response.status().as_u16(),
            });
        }

        tracing::info!(to = %email.to, "Enquiry email delivered");
        Ok(())
    }

    async fn subscribe(&self, address: &str) -> Result<(), MailError> {
        let form = [("address", address), ("name", "")];

        let response = self
            .client
            .post(format!(
                "{API_BASE}/lists/{}/members",
                self.config.list_address
            ))
            .basic_auth("api", Some(&self.config.sending_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MailError::Rejected {
                status: response.status().as_u16(),
            });
        }

        tracing::info!(address, "Mailing-list signup accepted");
        Ok(())
    }
}
