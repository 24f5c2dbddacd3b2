//! Fixed norm tables used by the scientific scoring pipeline

use crate::assessment::{CognitiveDomain, Difficulty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard error of measurement for the full-scale score
pub const SEM: f64 = 4.5;
/// z value of a two-sided 95% interval
pub const Z_95: f64 = 1.96;
/// Item count that counts as a complete administration for reliability
pub const RELIABILITY_FULL_LENGTH: f64 = 75.0;
/// Weight used for a domain absent from [`DomainWeights`]
pub const FALLBACK_DOMAIN_WEIGHT: f64 = 0.20;

/// Age factors for ages 6..=25; other ages use 1.0
const AGE_FACTORS: [(u32, f64); 20] = [
    (6, 0.85),
    (7, 0.88),
    (8, 0.91),
    (9, 0.94),
    (10, 0.97),
    (11, 0.99),
    (12, 1.00),
    (13, 1.01),
    (14, 1.02),
    (15, 1.03),
    (16, 1.04),
    (17, 1.05),
    (18, 1.05),
    (19, 1.04),
    (20, 1.03),
    (21, 1.02),
    (22, 1.01),
    (23, 1.00),
    (24, 0.99),
    (25, 0.98),
];

pub fn age_factor(age: u32) -> f64 {
    AGE_FACTORS
        .iter()
        .find(|(a, _)| *a == age)
        .map(|(_, f)| *f)
        .unwrap_or(1.0)
}

/// Multiplier applied to an item's contribution by tier
pub fn difficulty_weight(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.8,
        Difficulty::Medium => 1.0,
        Difficulty::Hard => 1.3,
    }
}

/// Bonus for fast correct answers. Only Processing Speed is timed.
pub fn speed_bonus(domain: CognitiveDomain, response_time_ms: u64) -> f64 {
    if domain != CognitiveDomain::ProcessingSpeed {
        return 0.0;
    }
    match response_time_ms {
        t if t < 5_000 => 0.2,
        t if t < 10_000 => 0.1,
        _ => 0.0,
    }
}

/// Contribution of each domain to the full-scale score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainWeights {
    weights: BTreeMap<CognitiveDomain, f64>,
}

impl Default for DomainWeights {
    fn default() -> Self {
        let weights = BTreeMap::from([
            (CognitiveDomain::VerbalComprehension, 0.25),
            (CognitiveDomain::PerceptualReasoning, 0.25),
            (CognitiveDomain::WorkingMemory, 0.20),
            (CognitiveDomain::ProcessingSpeed, 0.15),
            (CognitiveDomain::FluidReasoning, 0.15),
        ]);
        Self { weights }
    }
}

impl DomainWeights {
    /// Table with only the given entries; everything else falls back
    pub fn from_entries(entries: impl IntoIterator<Item = (CognitiveDomain, f64)>) -> Self {
        Self {
            weights: entries.into_iter().collect(),
        }
    }

    pub fn weight(&self, domain: CognitiveDomain) -> f64 {
        self.weights
            .get(&domain)
            .copied()
            .unwrap_or(FALLBACK_DOMAIN_WEIGHT)
    }
}
