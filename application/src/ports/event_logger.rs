//! Port for structured assessment event logging.
//!
//! Defines the [`AssessmentEventLogger`] trait for recording session events
//! (questions presented, responses, domain completion, reports) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the session
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured assessment event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields; the adapter adds the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentEvent {
    /// Event type identifier (e.g., "session_started", "response_recorded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AssessmentEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging assessment events.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and infallible; logging failures must not disturb
/// the session.
pub trait AssessmentEventLogger: Send + Sync {
    fn log(&self, event: AssessmentEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEventLogger;

impl AssessmentEventLogger for NoEventLogger {
    fn log(&self, _event: AssessmentEvent) {}
}
