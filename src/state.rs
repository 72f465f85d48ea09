// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::services::commentary::{CommentaryStore, FileCommentaryStore};
use crate::services::credentials::{CredentialStore, StaticCredentials};
use crate::services::session_manager::SessionManager;
use crate::services::upstream::build_client;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub credentials: Arc<dyn CredentialStore>,
    pub commentary: Arc<dyn CommentaryStore>,
    pub http: Client,
    pub live_scores_url: String,
    pub commentary_url: String,
}

impl AppState {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            sessions: SessionManager::new(config.session_ttl),
            credentials: Arc::new(StaticCredentials::new(
                config.auth_username.clone(),
                config.auth_password.clone(),
            )),
            commentary: Arc::new(FileCommentaryStore::new(config.commentary_file.clone())),
            http: build_client()?,
            live_scores_url: config.live_scores_url.clone(),
            commentary_url: config.commentary_url.clone(),
        })
    }

    pub fn with_commentary_store(mut self, store: Arc<dyn CommentaryStore>) -> Self {
        self.commentary = store;
        self
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = credentials;
        self
    }
}
