//! Scoring strategy abstraction
//!
//! Two strategies produce materially different numbers and both feed the
//! report layer, so they sit side by side behind one trait.

use super::pipeline::ScientificScoring;
use super::score_report::ScoreReport;
use super::weighted::WeightedAccuracyScoring;
use crate::assessment::ResponseLog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Turns a response log into a [`ScoreReport`]. Pure and infallible.
pub trait ScoringStrategy: Send + Sync {
    fn kind(&self) -> ScoringStrategyKind;

    fn score(&self, responses: &ResponseLog, user_age: u32) -> ScoreReport;
}

/// Selectable strategy name (config / CLI)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringStrategyKind {
    /// Seven-stage normed pipeline
    #[default]
    Scientific,
    /// Difficulty-point accuracy mapped linearly onto the index scale
    WeightedAccuracy,
}

impl ScoringStrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategyKind::Scientific => "scientific",
            ScoringStrategyKind::WeightedAccuracy => "weighted-accuracy",
        }
    }

    /// Default-configured strategy of this kind
    pub fn strategy(&self) -> Box<dyn ScoringStrategy> {
        match self {
            ScoringStrategyKind::Scientific => Box::new(ScientificScoring::default()),
            ScoringStrategyKind::WeightedAccuracy => Box::new(WeightedAccuracyScoring::default()),
        }
    }
}

impl fmt::Display for ScoringStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoringStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "scientific" => Ok(ScoringStrategyKind::Scientific),
            "weighted-accuracy" | "weighted" | "simple" => Ok(ScoringStrategyKind::WeightedAccuracy),
            _ => Err(format!(
                "Invalid scoring strategy: {} (expected scientific or weighted-accuracy)",
                s
            )),
        }
    }
}
