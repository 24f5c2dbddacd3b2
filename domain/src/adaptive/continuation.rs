//! Stopping rule for a domain
//!
//! Rules, evaluated in order:
//!
//! 1. Fewer than 3 responses → continue
//! 2. 10 or more responses → stop
//! 3. Last 3 all correct while already at `Hard` → stop (ceiling)
//! 4. Last 3 all incorrect while already at `Easy` → stop (floor)
//! 5. Otherwise → continue

use crate::assessment::{Difficulty, DomainScoreAccumulator, Response};
use serde::{Deserialize, Serialize};

/// Why a domain stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Hard item limit for a single domain
    ItemLimit,
    /// Consistently correct at the hardest tier
    CeilingReached,
    /// Consistently incorrect at the easiest tier
    FloorReached,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::ItemLimit => "item limit reached",
            StopReason::CeilingReached => "ceiling reached",
            StopReason::FloorReached => "floor reached",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationDecision {
    Continue,
    Stop(StopReason),
}

impl ContinuationDecision {
    pub fn should_continue(&self) -> bool {
        matches!(self, ContinuationDecision::Continue)
    }
}

/// Decides whether a domain needs more evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainContinuationPolicy {
    /// Responses required before any stopping rule may fire
    pub min_responses: u32,
    /// Responses after which the domain always stops
    pub max_responses: u32,
    /// Length of the all-correct / all-incorrect run checked at the tier ends
    pub streak_length: usize,
}

impl Default for DomainContinuationPolicy {
    fn default() -> Self {
        Self {
            min_responses: 3,
            max_responses: 10,
            streak_length: 3,
        }
    }
}

impl DomainContinuationPolicy {
    /// Evaluate the rules against the domain's tally.
    ///
    /// `recent` holds the domain's latest responses in chronological order;
    /// only the last `streak_length` of them are looked at.
    pub fn evaluate(
        &self,
        accumulator: &DomainScoreAccumulator,
        recent: &[&Response],
        current: Difficulty,
    ) -> ContinuationDecision {
        if accumulator.total_count < self.min_responses {
            return ContinuationDecision::Continue;
        }
        if accumulator.total_count >= self.max_responses {
            return ContinuationDecision::Stop(StopReason::ItemLimit);
        }
        if recent.len() < self.streak_length {
            return ContinuationDecision::Continue;
        }

        let window = &recent[recent.len() - self.streak_length..];
        let all_correct = window.iter().all(|r| r.correct);
        let all_incorrect = window.iter().all(|r| !r.correct);

        if all_correct && current == Difficulty::Hard {
            return ContinuationDecision::Stop(StopReason::CeilingReached);
        }
        if all_incorrect && current == Difficulty::Easy {
            return ContinuationDecision::Stop(StopReason::FloorReached);
        }
        ContinuationDecision::Continue
    }

    pub fn should_continue(
        &self,
        accumulator: &DomainScoreAccumulator,
        recent: &[&Response],
        current: Difficulty,
    ) -> bool {
        self.evaluate(accumulator, recent, current).should_continue()
    }
}
