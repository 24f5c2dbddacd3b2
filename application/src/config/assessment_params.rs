//! Assessment parameters: session driver control.
//!
//! [`AssessmentParams`] groups the static parameters the
//! [`RunAssessmentUseCase`](crate::use_cases::run_assessment::RunAssessmentUseCase)
//! needs. These are application-layer concerns, not domain policy.

use iqtest_domain::ScoringStrategyKind;
use serde::{Deserialize, Serialize};

/// Age assumed when the test-taker does not declare one
pub const DEFAULT_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentParams {
    /// Age used when a fresh session is started without one.
    pub default_age: u32,
    /// Strategy used to score a finished session.
    pub strategy: ScoringStrategyKind,
    /// Fixed seed for question selection; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for AssessmentParams {
    fn default() -> Self {
        Self {
            default_age: DEFAULT_AGE,
            strategy: ScoringStrategyKind::default(),
            seed: None,
        }
    }
}

impl AssessmentParams {
    // ==================== Builder Methods ====================

    pub fn with_default_age(mut self, age: u32) -> Self {
        self.default_age = age;
        self
    }

    pub fn with_strategy(mut self, strategy: ScoringStrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = AssessmentParams::default();
        assert_eq!(params.default_age, 18);
        assert_eq!(params.strategy, ScoringStrategyKind::Scientific);
        assert!(params.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let params = AssessmentParams::default()
            .with_default_age(12)
            .with_strategy(ScoringStrategyKind::WeightedAccuracy)
            .with_seed(Some(7));

        assert_eq!(params.default_age, 12);
        assert_eq!(params.strategy, ScoringStrategyKind::WeightedAccuracy);
        assert_eq!(params.seed, Some(7));
    }
}
