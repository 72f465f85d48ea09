// src/services/commentary.rs
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CommentaryError, FetchError, PersistError};
use crate::services::upstream::get_bytes;

/// Where the last fetched commentary lives. Each save replaces the whole blob.
#[async_trait]
pub trait CommentaryStore: Send + Sync {
    /// Persist `raw` verbatim. On error the previous blob must be left intact.
    async fn save(&self, raw: &[u8]) -> Result<(), PersistError>;

    /// `None` until the first successful save.
    async fn load(&self) -> Result<Option<Value>, PersistError>;
}

#[derive(Debug, Clone)]
pub struct FileCommentaryStore {
    path: PathBuf,
}

impl FileCommentaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Unique per call, so overlapping saves never share a temp file.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".{}.tmp", Uuid::new_v4()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CommentaryStore for FileCommentaryStore {
    async fn save(&self, raw: &[u8]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write beside the target then rename, so a failed write never truncates it.
        let tmp_path = self.tmp_path();
        let written = match tokio::fs::write(&tmp_path, raw).await {
            Ok(()) => tokio::fs::rename(&tmp_path, &self.path).await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), bytes = raw.len(), "saved commentary");
        Ok(())
    }

    async fn load(&self) -> Result<Option<Value>, PersistError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&contents)?))
    }
}

/// Keeps the blob in memory. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryCommentaryStore {
    raw: RwLock<Option<Vec<u8>>>,
}

impl MemoryCommentaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the last save, exactly as given.
    pub async fn raw(&self) -> Option<Vec<u8>> {
        self.raw.read().await.clone()
    }
}

#[async_trait]
impl CommentaryStore for MemoryCommentaryStore {
    async fn save(&self, raw: &[u8]) -> Result<(), PersistError> {
        *self.raw.write().await = Some(raw.to_vec());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Value>, PersistError> {
        match self.raw.read().await.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_slice(raw)?)),
            None => Ok(None),
        }
    }
}

/// Fetch the commentary JSON and persist the body bytes untouched. Nothing is
/// written unless the body parsed as JSON.
pub async fn fetch_and_save_commentary(
    client: &Client,
    url: &str,
    store: &dyn CommentaryStore,
) -> Result<Value, CommentaryError> {
    let raw = get_bytes(client, url).await?;
    let commentary: Value = serde_json::from_slice(&raw).map_err(FetchError::InvalidJson)?;
    store.save(&raw).await?;
    tracing::info!(bytes = raw.len(), "commentary fetched and saved");
    Ok(commentary)
}

pub async fn load_saved_commentary(store: &dyn CommentaryStore) -> Result<Option<Value>, PersistError> {
    store.load().await
}
