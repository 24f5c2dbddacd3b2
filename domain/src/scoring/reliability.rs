//! Internal-consistency proxy over the response sequence

use super::tables::RELIABILITY_FULL_LENGTH;
use crate::assessment::Response;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliabilityLevel {
    High,
    Moderate,
    Low,
}

impl ReliabilityLevel {
    fn from_consistency(consistency: f64) -> Self {
        if consistency > 0.8 {
            ReliabilityLevel::High
        } else if consistency > 0.6 {
            ReliabilityLevel::Moderate
        } else {
            ReliabilityLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReliabilityLevel::High => "High",
            ReliabilityLevel::Moderate => "Moderate",
            ReliabilityLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ReliabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reliability {
    /// consistency × completion, two decimals
    pub coefficient: f64,
    /// 1 - flips / (n - 1)
    pub consistency: f64,
    pub interpretation: ReliabilityLevel,
}

impl Reliability {
    /// Evaluate over responses in submission order, across all domains.
    ///
    /// With one response or none there are no adjacent pairs, so consistency
    /// is 1.0.
    pub fn evaluate<'a>(responses: impl IntoIterator<Item = &'a Response>) -> Self {
        let outcomes: Vec<bool> = responses.into_iter().map(|r| r.correct).collect();
        let consistency = response_consistency(&outcomes);
        let completion = (outcomes.len() as f64 / RELIABILITY_FULL_LENGTH).min(1.0);

        Self {
            coefficient: ((consistency * completion) * 100.0).round() / 100.0,
            consistency,
            interpretation: ReliabilityLevel::from_consistency(consistency),
        }
    }
}

fn response_consistency(outcomes: &[bool]) -> f64 {
    if outcomes.len() <= 1 {
        return 1.0;
    }
    let flips = outcomes.windows(2).filter(|pair| pair[0] != pair[1]).count();
    1.0 - flips as f64 / (outcomes.len() - 1) as f64
}
