//! Bearer-session storage.
//!
//! The backend credential is an opaque bearer token, stored together with
//! the username it was issued for as a single [`StoredSession`] record.
//! Storage sits behind the [`SessionStore`] trait so host applications
//! inject whatever persistence fits them; the crate ships an in-memory
//! store (the default) and a JSON-file store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ClientError;

/// Persisted bearer credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    /// Opaque bearer token attached to every authenticated request.
    pub token: String,
    /// Username the token was issued for, kept for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Unix timestamp of the last write.
    pub saved_at: i64,
}

impl StoredSession {
    /// New session stamped with the current time.
    pub fn new(token: impl Into<String>, username: Option<String>) -> Self {
        Self {
            token: token.into(),
            username,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Where the bearer session lives between requests.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current session, or `None` when logged out.
    async fn load(&self) -> Result<Option<StoredSession>, ClientError>;
    /// Persist a session, replacing any previous one.
    async fn save(&self, session: &StoredSession) -> Result<(), ClientError>;
    /// Forget the session. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), ClientError>;
}

/// In-memory store; the default for freshly constructed clients.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<StoredSession>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<StoredSession>, ClientError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &StoredSession) -> Result<(), ClientError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// JSON-file store.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write cannot truncate the session file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional location under the platform config directory:
    /// `<config dir>/what-to-wear/session.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("what-to-wear").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_err(&self, action: &str, err: impl std::fmt::Display) -> ClientError {
        ClientError::Storage(format!("{action} {}: {err}", self.path.display()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<StoredSession>, ClientError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.storage_err("read", err)),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| self.storage_err("parse", err))
    }

    async fn save(&self, session: &StoredSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| self.storage_err("create dir for", err))?;
        }

        let raw = serde_json::to_string_pretty(session).map_err(|err| self.storage_err("serialize", err))?;
        let temp = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp, raw)
            .await
            .map_err(|err| self.storage_err("write", err))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|err| self.storage_err("rename", err))?;

        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.storage_err("remove", err)),
        }
    }
}

/// Shared handle used by the client.
pub type SharedSessionStore = Arc<dyn SessionStore>;
