//! Report output formatting

pub mod console;
pub mod formatter;

pub use console::ConsoleFormatter;
pub use formatter::ReportFormatter;
