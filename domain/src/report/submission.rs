//! Flat result payload for a results store

use super::assembler::AssessmentReport;
use crate::assessment::CognitiveDomain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What gets transmitted once a session is scored. Delivery is the caller's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubmission {
    pub fsiq: i32,
    pub domain_scores: BTreeMap<CognitiveDomain, i32>,
    pub percentile: f64,
    pub classification: String,
    pub reliability_coefficient: f64,
    pub duration_seconds: u64,
}

impl ResultSubmission {
    pub fn from_report(report: &AssessmentReport) -> Self {
        let score = &report.score;
        Self {
            fsiq: score.fsiq,
            domain_scores: score.index_scores(),
            percentile: score.percentile,
            classification: score.classification.to_string(),
            reliability_coefficient: score.reliability.coefficient,
            duration_seconds: report.duration_secs,
        }
    }
}
