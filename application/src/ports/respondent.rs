//! Respondent port: presents a question and collects the answer.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`RespondentPort`] - defined here in application layer
//! - **Adapter**: `ConsoleRespondent` - implemented in presentation layer
//!
//! The adapter measures the response time itself, from the moment the item
//! is shown to the moment the answer is submitted.

use async_trait::async_trait;
use iqtest_domain::{CognitiveDomain, Difficulty, Question, SubmittedAnswer};

/// Where the question sits in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionContext {
    pub domain: CognitiveDomain,
    pub difficulty: Difficulty,
    /// 1-based count of questions presented so far, this one included
    pub question_number: usize,
    pub progress_percent: u8,
}

/// The respondent's answer plus how long it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub answer: SubmittedAnswer,
    pub response_time_ms: u64,
}

impl AnswerSubmission {
    pub fn new(answer: SubmittedAnswer, response_time_ms: u64) -> Self {
        Self {
            answer,
            response_time_ms,
        }
    }
}

/// Error type for respondent operations.
///
/// These are failures of the interaction, not wrong answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespondentError {
    /// User stopped the session (e.g., via Ctrl+C or `q`).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
}

impl std::fmt::Display for RespondentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RespondentError::Cancelled => write!(f, "Session cancelled by respondent"),
            RespondentError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for RespondentError {}

#[async_trait]
pub trait RespondentPort: Send + Sync {
    async fn ask(
        &self,
        question: &Question,
        context: &QuestionContext,
    ) -> Result<AnswerSubmission, RespondentError>;
}
