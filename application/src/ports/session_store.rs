//! Session persistence port
//!
//! Stores the single in-progress [`SessionState`]. Saved state must
//! round-trip losslessly; it is restored verbatim, never recomputed.

use async_trait::async_trait;
use iqtest_domain::SessionState;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionStoreError {
    #[error("Session store I/O error: {0}")]
    Io(String),

    #[error("Saved session is unreadable: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError>;

    /// The saved session, or `None` if nothing is saved.
    async fn load(&self) -> Result<Option<SessionState>, SessionStoreError>;

    /// Discard the saved session. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
