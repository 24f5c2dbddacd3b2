//! Port definitions (interfaces for external adapters)

pub mod catalog_source;
pub mod event_logger;
pub mod progress;
pub mod respondent;
pub mod session_store;
