//! Per-domain difficulty staircase
//!
//! A monotone single-step staircase: each scored response moves the domain's
//! difficulty at most one tier, up after a correct answer and down after an
//! incorrect one, saturating at both ends. Only the immediately preceding
//! answer matters.

use crate::assessment::{CognitiveDomain, Difficulty, SessionState};

/// Difficulty transition rule over `SessionState::difficulty_by_domain`
pub struct DifficultyStaircase;

impl DifficultyStaircase {
    /// Tier every domain starts at
    pub const INITIAL: Difficulty = Difficulty::Medium;

    /// Pure transition for one response
    pub fn step(prior: Difficulty, was_correct: bool) -> Difficulty {
        if was_correct {
            prior.harder()
        } else {
            prior.easier()
        }
    }

    /// Current tier for a domain, `Medium` if it has never been touched
    pub fn current(state: &SessionState, domain: CognitiveDomain) -> Difficulty {
        state.difficulty(domain).unwrap_or(Self::INITIAL)
    }

    /// Next state after scoring one response in `domain`
    pub fn advance(state: SessionState, domain: CognitiveDomain, was_correct: bool) -> SessionState {
        let next = Self::step(Self::current(&state, domain), was_correct);
        state.with_difficulty(domain, next)
    }

    /// Make sure the domain has a tier recorded, without moving it
    pub fn initialize(state: SessionState, domain: CognitiveDomain) -> SessionState {
        if state.difficulty(domain).is_some() {
            return state;
        }
        state.with_difficulty(domain, Self::INITIAL)
    }
}
