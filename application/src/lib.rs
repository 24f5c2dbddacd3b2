//! Application layer for adaptive-iq
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AssessmentParams, DEFAULT_AGE};
pub use ports::{
    catalog_source::{CatalogError, CatalogSource},
    event_logger::{AssessmentEvent, AssessmentEventLogger, NoEventLogger},
    progress::{NoProgress, SessionProgressNotifier},
    respondent::{AnswerSubmission, QuestionContext, RespondentError, RespondentPort},
    session_store::{SessionStore, SessionStoreError},
};
pub use use_cases::run_assessment::{
    AssessmentOutcome, RunAssessmentError, RunAssessmentUseCase, SessionStart,
};
pub use use_cases::score_session::{ScoreSessionError, ScoreSessionUseCase};
