//! Session state value and its transitions
//!
//! [`SessionState`] is the entire persisted/resumable state of one test
//! administration. It is an immutable value: every transition consumes the
//! state and returns the next one, so a saved copy can never be changed
//! behind the driver's back.

use super::accumulator::DomainScoreAccumulator;
use super::response::{Response, ResponseLog};
use super::{CognitiveDomain, Difficulty};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Estimated number of items per domain, used for progress display only
pub const ESTIMATED_ITEMS_PER_DOMAIN: usize = 7;

/// Youngest and oldest accepted declared ages
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub responses: ResponseLog,
    pub difficulty_by_domain: BTreeMap<CognitiveDomain, Difficulty>,
    pub domain_scores: BTreeMap<CognitiveDomain, DomainScoreAccumulator>,
    pub domain_index: usize,
    pub user_age: u32,
    pub elapsed_ms: u64,
}

impl SessionState {
    /// Fresh session for a test-taker of the given age
    pub fn new(user_age: u32) -> Result<Self, DomainError> {
        if !(MIN_AGE..=MAX_AGE).contains(&user_age) {
            return Err(DomainError::InvalidAge(user_age));
        }
        Ok(Self {
            responses: ResponseLog::new(),
            difficulty_by_domain: BTreeMap::new(),
            domain_scores: BTreeMap::new(),
            domain_index: 0,
            user_age,
            elapsed_ms: 0,
        })
    }

    /// Next state with the response appended and folded into its accumulator.
    ///
    /// Leaves `self` untouched, so a rejected duplicate costs nothing.
    pub fn record(&self, response: Response) -> Result<Self, DomainError> {
        let mut next = self.clone();
        let domain = response.domain;
        let accumulator = next.accumulator(domain).record(&response);
        next.responses = next.responses.record(response)?;
        next.domain_scores.insert(domain, accumulator);
        Ok(next)
    }

    pub fn with_difficulty(mut self, domain: CognitiveDomain, difficulty: Difficulty) -> Self {
        self.difficulty_by_domain.insert(domain, difficulty);
        self
    }

    /// Move on to the next domain in the progression
    pub fn advance_domain(mut self) -> Self {
        if self.domain_index < CognitiveDomain::ALL.len() {
            self.domain_index += 1;
        }
        self
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    pub fn current_domain(&self) -> Option<CognitiveDomain> {
        CognitiveDomain::at(self.domain_index)
    }

    /// True once every domain has been exhausted
    pub fn is_complete(&self) -> bool {
        self.domain_index >= CognitiveDomain::ALL.len()
    }

    pub fn difficulty(&self, domain: CognitiveDomain) -> Option<Difficulty> {
        self.difficulty_by_domain.get(&domain).copied()
    }

    pub fn accumulator(&self, domain: CognitiveDomain) -> DomainScoreAccumulator {
        self.domain_scores.get(&domain).cloned().unwrap_or_default()
    }

    pub fn estimated_progress_percent(&self) -> u8 {
        let estimated_total = CognitiveDomain::ALL.len() * ESTIMATED_ITEMS_PER_DOMAIN;
        let pct = (self.responses.len() as f64 / estimated_total as f64 * 100.0).round();
        pct.min(100.0) as u8
    }

    /// Check a restored state for internal consistency.
    ///
    /// Restored state is used verbatim, never recomputed; this only rejects
    /// payloads whose parts disagree with each other.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.user_age) {
            return Err(DomainError::InvalidAge(self.user_age));
        }
        if self.domain_index > CognitiveDomain::ALL.len() {
            return Err(DomainError::DomainIndexOutOfRange {
                index: self.domain_index,
            });
        }
        ResponseLog::from_responses(self.responses.as_slice().to_vec())?;

        let replayed = self.responses.replay_accumulators();
        for domain in CognitiveDomain::ALL {
            let stored = self.domain_scores.get(&domain);
            let expected = replayed.get(&domain);
            let consistent = match (stored, expected) {
                (Some(s), Some(e)) => s == e,
                (Some(s), None) => s.total_count == 0,
                (None, Some(_)) => false,
                (None, None) => true,
            };
            if !consistent {
                return Err(DomainError::AccumulatorMismatch { domain });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(state: SessionState, id: &str, domain: CognitiveDomain, correct: bool) -> SessionState {
        state
            .record(Response::new(domain, id, correct, 3000, Difficulty::Medium, 1))
            .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_age() {
        assert_eq!(SessionState::new(0).unwrap_err(), DomainError::InvalidAge(0));
        assert!(SessionState::new(121).is_err());
        assert!(SessionState::new(12).is_ok());
    }

    #[test]
    fn test_record_updates_accumulator() {
        let state = SessionState::new(18).unwrap();
        let state = answer(state, "a", CognitiveDomain::WorkingMemory, true);
        let state = answer(state, "b", CognitiveDomain::WorkingMemory, false);

        let acc = state.accumulator(CognitiveDomain::WorkingMemory);
        assert_eq!(acc.total_count, 2);
        assert_eq!(acc.correct_count, 1);
        assert_eq!(state.responses.len(), 2);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_duplicate_record_keeps_previous_state() {
        let state = SessionState::new(18).unwrap();
        let state = answer(state, "a", CognitiveDomain::WorkingMemory, true);
        let result = state.record(Response::new(
            CognitiveDomain::WorkingMemory,
            "a",
            true,
            1,
            Difficulty::Easy,
            2,
        ));
        assert!(result.is_err());
        assert_eq!(state.responses.len(), 1);
        assert_eq!(state.accumulator(CognitiveDomain::WorkingMemory).total_count, 1);
    }

    #[test]
    fn test_domain_progression() {
        let mut state = SessionState::new(18).unwrap();
        assert_eq!(state.current_domain(), Some(CognitiveDomain::VerbalComprehension));
        for _ in 0..5 {
            assert!(!state.is_complete());
            state = state.advance_domain();
        }
        assert!(state.is_complete());
        assert_eq!(state.current_domain(), None);
        assert_eq!(state.clone().advance_domain().domain_index, 5);
    }

    #[test]
    fn test_validate_detects_tampered_accumulator() {
        let state = SessionState::new(18).unwrap();
        let mut state = answer(state, "a", CognitiveDomain::FluidReasoning, true);
        state
            .domain_scores
            .get_mut(&CognitiveDomain::FluidReasoning)
            .unwrap()
            .correct_count = 0;
        assert_eq!(
            state.validate().unwrap_err(),
            DomainError::AccumulatorMismatch {
                domain: CognitiveDomain::FluidReasoning
            }
        );
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let state = SessionState::new(15).unwrap();
        let state = answer(state, "a", CognitiveDomain::VerbalComprehension, true)
            .with_difficulty(CognitiveDomain::VerbalComprehension, Difficulty::Hard)
            .advance_domain()
            .with_elapsed_ms(65_000);

        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert!(restored.validate().is_ok());
    }

    #[test]
    fn test_progress_estimate_caps_at_100() {
        let mut state = SessionState::new(18).unwrap();
        assert_eq!(state.estimated_progress_percent(), 0);
        for i in 0..40 {
            state = answer(state, &format!("q{}", i), CognitiveDomain::ProcessingSpeed, true);
        }
        assert_eq!(state.estimated_progress_percent(), 100);
    }
}
