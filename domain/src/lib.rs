//! Domain layer for adaptive-iq
//!
//! This crate contains the core assessment logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns, performs
//! no I/O and never blocks.
//!
//! # Core Concepts
//!
//! ## Adaptive administration
//!
//! Items are drawn per cognitive domain from a catalog bucketed by
//! difficulty. A single-step staircase moves the domain's tier after every
//! answer, and a stopping rule ends the domain once it has enough evidence.
//!
//! ## Scoring
//!
//! A finished (or partial) response log is turned into a [`ScoreReport`] by a
//! [`ScoringStrategy`]: either the seven-stage normed pipeline or the lighter
//! weighted-accuracy mapping.
//!
//! ## State
//!
//! [`SessionState`] is an immutable value; every transition returns a new
//! state, so persisted and live state are structurally identical.

pub mod adaptive;
pub mod assessment;
pub mod config;
pub mod core;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use adaptive::{
    AdaptiveSelector, ContinuationDecision, DifficultyStaircase, DomainContinuationPolicy,
    ExhaustionReason, Selection, SelectionError, SelectionOutcome, StopReason,
};
pub use assessment::{
    AnswerKey, CognitiveDomain, Difficulty, DomainScoreAccumulator, Question, QuestionCatalog,
    Response, ResponseLog, SessionState, SubmittedAnswer,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use report::{AssessmentReport, DomainPerformance, ReportAssembler, ResultSubmission};
pub use scoring::{
    ClassificationLevel, ClassificationPolicy, DomainScore, ReliabilityLevel, ScientificScoring,
    ScoreReport, ScoringStrategy, ScoringStrategyKind, WeightedAccuracyScoring,
};
