//! Catalog source port
//!
//! The question bank is fetched once, before the engine is first invoked.
//! A failed fetch is reported as [`CatalogError`] and is fatal to starting
//! or resuming a session; it is never replaced by an empty catalog.

use async_trait::async_trait;
use iqtest_domain::QuestionCatalog;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog could not be fetched at all (missing file, HTTP failure)
    #[error("Question catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog was fetched but could not be understood
    #[error("Question catalog malformed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog.
    async fn load(&self) -> Result<QuestionCatalog, CatalogError>;

    /// Where the catalog comes from, for logs and messages.
    fn describe(&self) -> String;
}
