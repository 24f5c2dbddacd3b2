//! Seven-stage scientific scoring pipeline
//!
//! ```text
//! responses ─▶ 1 raw % ─▶ 2 scaled (10±3) ─▶ 3 composite (100±15)
//!          ─▶ 4 age-adjusted ─▶ 5 FSIQ (+ Flynn) ─▶ 6 CI ─▶ 7 percentile / class
//! ```
//!
//! Only stage 1 reads the response log; every later stage works on the
//! previous stage's output.

use super::classification::ClassificationPolicy;
use super::normal::{self, MEAN_IQ};
use super::profile::ProfileAnalysis;
use super::reliability::Reliability;
use super::score_report::{ConfidenceInterval, DomainScore, ScoreReport};
use super::strategy::{ScoringStrategy, ScoringStrategyKind};
use super::tables::{self, DomainWeights, SEM, Z_95};
use crate::assessment::{CognitiveDomain, Response, ResponseLog};
use std::collections::BTreeMap;

pub const SCALED_MIN: i32 = 1;
pub const SCALED_MAX: i32 = 19;
pub const INDEX_MIN: i32 = 40;
pub const INDEX_MAX: i32 = 160;

/// SD of the raw percentage distribution assumed by stage 2
const RAW_SD: f64 = 16.67;

/// Stage 1 output for one domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScore {
    pub percent: f64,
    pub response_count: u32,
}

impl RawScore {
    pub fn has_data(&self) -> bool {
        self.response_count > 0
    }
}

/// Stage 1: weighted percentage correct for every domain.
///
/// A domain without responses gets 0 with `response_count == 0`.
pub fn raw_scores<'a>(
    responses: impl IntoIterator<Item = &'a Response>,
) -> BTreeMap<CognitiveDomain, RawScore> {
    let mut earned: BTreeMap<CognitiveDomain, (f64, f64, u32)> = CognitiveDomain::ALL
        .iter()
        .map(|d| (*d, (0.0, 0.0, 0)))
        .collect();

    for response in responses {
        let weight = tables::difficulty_weight(response.difficulty);
        let entry = earned.entry(response.domain).or_insert((0.0, 0.0, 0));
        if response.correct {
            entry.0 += weight * (1.0 + tables::speed_bonus(response.domain, response.response_time_ms));
        }
        entry.1 += weight;
        entry.2 += 1;
    }

    earned
        .into_iter()
        .map(|(domain, (score, possible, count))| {
            let percent = if possible > 0.0 {
                score / possible * 100.0
            } else {
                0.0
            };
            (
                domain,
                RawScore {
                    percent,
                    response_count: count,
                },
            )
        })
        .collect()
}

/// Stage 2
pub fn scaled_score(raw_percent: f64) -> i32 {
    let z = (raw_percent - 50.0) / RAW_SD;
    ((10.0 + z * 3.0).round() as i32).clamp(SCALED_MIN, SCALED_MAX)
}

/// Stage 3
pub fn composite_score(scaled: i32) -> i32 {
    let z = (scaled as f64 - 10.0) / 3.0;
    ((100.0 + z * 15.0).round() as i32).clamp(INDEX_MIN, INDEX_MAX)
}

/// Stage 4. Not re-clamped; a factor above 1 can push a 160 past the range.
pub fn age_adjusted_score(composite: i32, age: u32) -> i32 {
    let deviation = (composite as f64) - MEAN_IQ;
    (MEAN_IQ + deviation * tables::age_factor(age)).round() as i32
}

/// Stage 5 correction term, an extension point for norm obsolescence.
pub fn flynn_correction() -> f64 {
    0.0
}

/// Stage 5: weighted mean of the given domain scores plus correction,
/// clamped to the index range. No scores at all gives the population mean.
pub fn full_scale<I>(scores: I, weights: &DomainWeights) -> f64
where
    I: IntoIterator<Item = (CognitiveDomain, i32)>,
{
    let (weighted_sum, total_weight) =
        scores
            .into_iter()
            .fold((0.0, 0.0), |(sum, total), (domain, score)| {
                let w = weights.weight(domain);
                (sum + score as f64 * w, total + w)
            });

    let mean = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        MEAN_IQ
    };
    (mean + flynn_correction()).clamp(INDEX_MIN as f64, INDEX_MAX as f64)
}

/// Stage 6: 95% interval from the fixed SEM
pub fn confidence_interval(fsiq: f64) -> ConfidenceInterval {
    let margin = Z_95 * SEM;
    ConfidenceInterval {
        lower: (fsiq - margin).round() as i32,
        upper: (fsiq + margin).round() as i32,
        confidence: 95,
    }
}

/// Scientific scoring: stages 1-7 plus reliability and profile analysis
#[derive(Debug, Clone, Default)]
pub struct ScientificScoring {
    weights: DomainWeights,
    classification: ClassificationPolicy,
}

impl ScientificScoring {
    pub fn with_weights(mut self, weights: DomainWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_classification(mut self, classification: ClassificationPolicy) -> Self {
        self.classification = classification;
        self
    }
}

impl ScoringStrategy for ScientificScoring {
    fn kind(&self) -> ScoringStrategyKind {
        ScoringStrategyKind::Scientific
    }

    fn score(&self, responses: &ResponseLog, user_age: u32) -> ScoreReport {
        let domains: BTreeMap<CognitiveDomain, DomainScore> = raw_scores(responses.iter())
            .into_iter()
            .map(|(domain, raw)| {
                let scaled = scaled_score(raw.percent);
                let composite = composite_score(scaled);
                let adjusted = age_adjusted_score(composite, user_age);
                let score = DomainScore {
                    domain,
                    raw_score: raw.percent,
                    scaled_score: Some(scaled),
                    composite_score: Some(composite),
                    index_score: adjusted,
                    percentile: normal::percentile_rank(adjusted as f64),
                    classification: self.classification.classify(adjusted as f64),
                    response_count: raw.response_count,
                    insufficient_data: !raw.has_data(),
                };
                (domain, score)
            })
            .collect();

        let with_data: BTreeMap<CognitiveDomain, i32> = domains
            .values()
            .filter(|d| !d.insufficient_data)
            .map(|d| (d.domain, d.index_score))
            .collect();

        let fsiq = full_scale(with_data.iter().map(|(d, s)| (*d, *s)), &self.weights);
        let profile = ProfileAnalysis::analyze(&with_data);

        ScoreReport {
            strategy: self.kind(),
            user_age,
            fsiq: fsiq.round() as i32,
            percentile: normal::percentile_rank(fsiq),
            classification: self.classification.classify(fsiq),
            confidence_interval: confidence_interval(fsiq),
            flynn_correction: flynn_correction(),
            domains,
            reliability: Reliability::evaluate(responses.iter()),
            strengths: profile.strengths,
            weaknesses: profile.weaknesses,
            recommendations: profile.recommendations,
            total_responses: responses.len(),
        }
    }
}
