//! Scoring output value objects

use super::classification::ClassificationLevel;
use super::normal;
use super::reliability::Reliability;
use super::strategy::ScoringStrategyKind;
use crate::assessment::CognitiveDomain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symmetric interval around the full-scale score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: i32,
    pub upper: i32,
    /// Coverage in percent
    pub confidence: u8,
}

impl ConfidenceInterval {
    pub fn contains(&self, score: i32) -> bool {
        self.lower <= score && score <= self.upper
    }
}

impl std::fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({}% CI)", self.lower, self.upper, self.confidence)
    }
}

/// Per-domain scoring detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: CognitiveDomain,
    /// 0-100 scale percentage (may exceed 100 with speed bonuses)
    pub raw_score: f64,
    /// Mean 10, SD 3; absent for strategies without this stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled_score: Option<i32>,
    /// Mean 100, SD 15, before age adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_score: Option<i32>,
    /// Final index score used for the full-scale average
    pub index_score: i32,
    pub percentile: f64,
    pub classification: ClassificationLevel,
    pub response_count: u32,
    /// No responses in this domain; excluded from the full-scale score
    pub insufficient_data: bool,
}

/// Domain that stands out from the test-taker's own mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub domain: CognitiveDomain,
    pub score: i32,
    /// Signed distance from the mean index score
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub strategy: ScoringStrategyKind,
    pub user_age: u32,
    pub fsiq: i32,
    /// One decimal place
    pub percentile: f64,
    pub classification: ClassificationLevel,
    pub confidence_interval: ConfidenceInterval,
    /// Additive full-scale correction (currently always zero)
    pub flynn_correction: f64,
    pub domains: BTreeMap<CognitiveDomain, DomainScore>,
    pub reliability: Reliability,
    pub strengths: Vec<ProfileEntry>,
    pub weaknesses: Vec<ProfileEntry>,
    pub recommendations: Vec<String>,
    pub total_responses: usize,
}

impl ScoreReport {
    pub fn domain(&self, domain: CognitiveDomain) -> Option<&DomainScore> {
        self.domains.get(&domain)
    }

    /// Index score per domain with data
    pub fn index_scores(&self) -> BTreeMap<CognitiveDomain, i32> {
        self.domains
            .values()
            .filter(|d| !d.insufficient_data)
            .map(|d| (d.domain, d.index_score))
            .collect()
    }

    /// Whole-number percentile of the reported full-scale score
    pub fn whole_percentile(&self) -> u8 {
        normal::percentile(self.fsiq as f64)
    }

    pub fn has_data(&self) -> bool {
        self.domains.values().any(|d| !d.insufficient_data)
    }
}
