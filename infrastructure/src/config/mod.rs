//! Configuration file loading for adaptive-iq
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ADAPTIVE_IQ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./adaptive-iq.toml` or `./.adaptive-iq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/adaptive-iq/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    CatalogLocation, FileAssessmentConfig, FileCatalogConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
