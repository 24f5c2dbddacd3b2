//! Logging infrastructure: structured assessment transcripts.
//!
//! Provides [`JsonlEventLogger`], a JSONL file writer that implements
//! the [`AssessmentEventLogger`](iqtest_application::AssessmentEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEventLogger;
