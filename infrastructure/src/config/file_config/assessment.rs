//! Assessment configuration from TOML (`[assessment]` section)

use iqtest_application::{AssessmentParams, DEFAULT_AGE};
use iqtest_domain::assessment::{MAX_AGE, MIN_AGE};
use iqtest_domain::{ConfigIssue, ConfigIssueCode, ScoringStrategyKind};
use serde::{Deserialize, Serialize};

/// Raw assessment configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssessmentConfig {
    /// Age used when none is declared at session start
    pub default_age: u32,
    /// Scoring strategy ("scientific" or "weighted-accuracy")
    pub strategy: String,
    /// Fixed selection seed for reproducible administrations
    pub seed: Option<u64>,
}

impl Default for FileAssessmentConfig {
    fn default() -> Self {
        Self {
            default_age: DEFAULT_AGE,
            strategy: ScoringStrategyKind::default().as_str().to_string(),
            seed: None,
        }
    }
}

impl FileAssessmentConfig {
    pub fn parse_strategy(&self) -> (ScoringStrategyKind, Vec<ConfigIssue>) {
        match self.strategy.parse::<ScoringStrategyKind>() {
            Ok(kind) => (kind, vec![]),
            Err(_) => {
                let fallback = ScoringStrategyKind::default();
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::UnknownStrategy,
                    format!(
                        "assessment.strategy: unknown value '{}', falling back to '{}'",
                        self.strategy, fallback
                    ),
                );
                (fallback, vec![issue])
            }
        }
    }

    pub fn parse_default_age(&self) -> (u32, Vec<ConfigIssue>) {
        if (MIN_AGE..=MAX_AGE).contains(&self.default_age) {
            (self.default_age, vec![])
        } else {
            let issue = ConfigIssue::error(
                ConfigIssueCode::AgeOutOfRange,
                format!(
                    "assessment.default_age: {} is outside {}..={}",
                    self.default_age, MIN_AGE, MAX_AGE
                ),
            );
            (DEFAULT_AGE, vec![issue])
        }
    }

    /// Convert to application parameters, falling back on invalid values
    pub fn to_params(&self) -> AssessmentParams {
        AssessmentParams::default()
            .with_default_age(self.parse_default_age().0)
            .with_strategy(self.parse_strategy().0)
            .with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileAssessmentConfig::default();
        assert_eq!(config.default_age, 18);
        assert_eq!(config.strategy, "scientific");
        assert_eq!(config.to_params(), AssessmentParams::default());
    }

    #[test]
    fn test_parse_strategy_aliases() {
        let config = FileAssessmentConfig {
            strategy: "weighted".to_string(),
            ..Default::default()
        };
        let (kind, issues) = config.parse_strategy();
        assert_eq!(kind, ScoringStrategyKind::WeightedAccuracy);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_strategy_warns_and_falls_back() {
        let config = FileAssessmentConfig {
            strategy: "bayesian".to_string(),
            ..Default::default()
        };
        let (kind, issues) = config.parse_strategy();
        assert_eq!(kind, ScoringStrategyKind::Scientific);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::UnknownStrategy);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_age_out_of_range_is_error() {
        let config = FileAssessmentConfig {
            default_age: 0,
            ..Default::default()
        };
        let (age, issues) = config.parse_default_age();
        assert_eq!(age, DEFAULT_AGE);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_to_params_carries_seed() {
        let config = FileAssessmentConfig {
            default_age: 12,
            seed: Some(7),
            ..Default::default()
        };
        let params = config.to_params();
        assert_eq!(params.default_age, 12);
        assert_eq!(params.seed, Some(7));
    }
}
