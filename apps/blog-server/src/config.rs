//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::database::DatabaseConfig;
use quill_infra::{JwtConfig, MailgunConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    /// The distinguished owner viewer who sees drafts.
    pub admin_user_id: i32,
    /// Where contact-form enquiries are sent.
    pub contact_recipient: String,
    pub mailgun: Option<MailgunConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let jwt = JwtConfig {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
                JwtConfig::default().secret
            }),
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| JwtConfig::default().issuer),
        };

        let mailgun = Self::mailgun_from_env();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            jwt,
            admin_user_id: env::var("ADMIN_USER_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            contact_recipient: env::var("CONTACT_RECIPIENT")
                .unwrap_or_else(|_| "owner@example.com".to_string()),
            mailgun,
        }
    }

    /// Mailgun is optional: without a domain and sending key the server runs
    /// with a log-only transport.
    fn mailgun_from_env() -> Option<MailgunConfig> {
        let domain = env::var("MAILGUN_DOMAIN").ok()?;
        let sending_key = env::var("MAILGUN_SENDING_KEY").ok()?;
        let list_address =
            env::var("MAILGUN_LIST_ADDRESS").unwrap_or_else(|_| format!("news@{domain}"));

        Some(MailgunConfig {
            domain,
            sending_key,
            list_address,
        })
    }
}
