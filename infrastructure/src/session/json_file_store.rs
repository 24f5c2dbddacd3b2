//! Session store backed by a single JSON file
//!
//! Writes go to a sibling temp file first and are renamed into place, so an
//! interrupted save never leaves a half-written session behind.

use async_trait::async_trait;
use iqtest_application::{SessionStore, SessionStoreError};
use iqtest_domain::SessionState;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, e: std::io::Error) -> SessionStoreError {
        SessionStoreError::Io(format!("{}: {}", self.path.display(), e))
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| SessionStoreError::Io(format!("serialize session: {}", e)))?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(
            "Saved session ({} responses) to {}",
            state.responses.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionState>, SessionStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| SessionStoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
