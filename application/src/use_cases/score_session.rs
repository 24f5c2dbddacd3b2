//! Score session use case
//!
//! Validates a (restored or freshly finished) [`SessionState`], runs the
//! configured [`ScoringStrategy`] and assembles the [`AssessmentReport`].

use iqtest_domain::{
    AssessmentReport, DomainError, ReportAssembler, ScoringStrategy, ScoringStrategyKind,
    SessionState,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreSessionError {
    #[error("Cannot score session: {0}")]
    InvalidSession(#[from] DomainError),
}

pub struct ScoreSessionUseCase {
    strategy: Box<dyn ScoringStrategy>,
}

impl ScoreSessionUseCase {
    pub fn new(kind: ScoringStrategyKind) -> Self {
        Self {
            strategy: kind.strategy(),
        }
    }

    pub fn with_strategy(strategy: Box<dyn ScoringStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_kind(&self) -> ScoringStrategyKind {
        self.strategy.kind()
    }

    pub fn execute(&self, state: &SessionState) -> Result<AssessmentReport, ScoreSessionError> {
        state.validate()?;
        debug!(
            strategy = %self.strategy.kind(),
            responses = state.responses.len(),
            "Scoring session"
        );

        let score = self.strategy.score(&state.responses, state.user_age);
        info!(
            fsiq = score.fsiq,
            percentile = score.percentile,
            classification = %score.classification,
            "Session scored"
        );
        Ok(ReportAssembler::assemble(state, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqtest_domain::{CognitiveDomain, Difficulty, Response};

    fn state_with_one_response() -> SessionState {
        SessionState::new(18)
            .unwrap()
            .record(Response::new(
                CognitiveDomain::VerbalComprehension,
                "vc1",
                true,
                3_000,
                Difficulty::Medium,
                0,
            ))
            .unwrap()
    }

    #[test]
    fn test_scores_with_selected_strategy() {
        let state = state_with_one_response();
        let scientific = ScoreSessionUseCase::new(ScoringStrategyKind::Scientific)
            .execute(&state)
            .unwrap();
        let weighted = ScoreSessionUseCase::new(ScoringStrategyKind::WeightedAccuracy)
            .execute(&state)
            .unwrap();

        assert_eq!(scientific.score.strategy, ScoringStrategyKind::Scientific);
        assert_eq!(weighted.score.strategy, ScoringStrategyKind::WeightedAccuracy);
        assert_eq!(weighted.total_questions, 1);
    }

    #[test]
    fn test_rejects_corrupted_state() {
        let mut state = state_with_one_response();
        state.domain_scores.clear();
        let err = ScoreSessionUseCase::new(ScoringStrategyKind::Scientific)
            .execute(&state)
            .unwrap_err();
        assert!(matches!(
            err,
            ScoreSessionError::InvalidSession(DomainError::AccumulatorMismatch { .. })
        ));
    }
}
