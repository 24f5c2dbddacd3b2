//! Progress notification port
//!
//! Defines the interface for reporting progress while a session runs.

use super::respondent::QuestionContext;
use iqtest_domain::{CognitiveDomain, DomainScoreAccumulator, ExhaustionReason};

/// Callback for progress updates during an assessment
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait SessionProgressNotifier: Send + Sync {
    /// Called when the driver enters a domain (also on resume)
    fn on_domain_start(&self, domain: CognitiveDomain, index: usize, total: usize);

    /// Called right before a question is handed to the respondent
    fn on_question(&self, _context: &QuestionContext) {}

    /// Called once an answer has been judged and recorded
    fn on_answer(&self, domain: CognitiveDomain, correct: bool, progress_percent: u8);

    /// Called when a domain has no further questions
    fn on_domain_complete(
        &self,
        domain: CognitiveDomain,
        reason: &ExhaustionReason,
        accumulator: &DomainScoreAccumulator,
    );

    /// Called once after the last domain
    fn on_assessment_complete(&self, _total_responses: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SessionProgressNotifier for NoProgress {
    fn on_domain_start(&self, _domain: CognitiveDomain, _index: usize, _total: usize) {}
    fn on_answer(&self, _domain: CognitiveDomain, _correct: bool, _progress_percent: u8) {}
    fn on_domain_complete(
        &self,
        _domain: CognitiveDomain,
        _reason: &ExhaustionReason,
        _accumulator: &DomainScoreAccumulator,
    ) {
    }
}
