//! Infrastructure layer for adaptive-iq
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: question catalogs, session persistence,
//! the JSONL event log and configuration file loading.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;

// Re-export commonly used types
#[cfg(feature = "remote-catalog")]
pub use catalog::HttpCatalogSource;
pub use catalog::{JsonFileCatalogSource, catalog_source, parse_catalog};
pub use config::{
    CatalogLocation, ConfigLoader, FileAssessmentConfig, FileCatalogConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileSessionConfig,
};
pub use logging::JsonlEventLogger;
pub use session::JsonFileSessionStore;
