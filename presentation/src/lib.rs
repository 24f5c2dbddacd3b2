//! Presentation layer for adaptive-iq
//!
//! This crate contains the CLI definition, the interactive console
//! respondent, progress reporters and report formatters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod respondent;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, StrategyArg};
pub use output::{ConsoleFormatter, ReportFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use respondent::ConsoleRespondent;
