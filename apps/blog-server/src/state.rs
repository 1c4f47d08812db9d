//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use quill_core::domain::Viewer;
use quill_core::ports::{
    Mailer, MessageRepository, PageRepository, PostRepository, TagRepository, UserRepository,
};
use quill_infra::database::{
    self, PostgresMessageRepository, PostgresPageRepository, PostgresPostRepository,
    PostgresTagRepository, PostgresUserRepository,
};
use quill_infra::{LogOnlyMailer, MailgunMailer};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub pages: Arc<dyn PageRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub users: Arc<dyn UserRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub mailer: Arc<dyn Mailer>,
    pub admin_user_id: i32,
    pub contact_recipient: String,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_config = config
            .database
            .as_ref()
            .context("DATABASE_URL is not set")?;

        let db = database::connect(db_config)
            .await
            .context("failed to connect to database")?;

        let mailer: Arc<dyn Mailer> = match &config.mailgun {
            Some(mailgun) => Arc::new(MailgunMailer::new(mailgun.clone())),
            None => {
                tracing::warn!("Mailgun not configured - outbound mail disabled");
                Arc::new(LogOnlyMailer)
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            pages: Arc::new(PostgresPageRepository::new(db.clone())),
            tags: Arc::new(PostgresTagRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            messages: Arc::new(PostgresMessageRepository::new(db)),
            mailer,
            admin_user_id: config.admin_user_id,
            contact_recipient: config.contact_recipient.clone(),
        })
    }

    /// The visibility viewer for an optionally-authenticated request.
    pub fn viewer(&self, user_id: Option<i32>) -> Viewer {
        match user_id {
            Some(id) => Viewer::user(id, self.admin_user_id),
            None => Viewer::anonymous(self.admin_user_id),
        }
    }
}
