//! Weighted-accuracy scoring
//!
//! Each correct answer earns its tier's points (easy 1, medium 2, hard 3);
//! the domain's accuracy is points earned over points possible, mapped
//! linearly onto 40..=160. The full-scale score is the plain mean of domains
//! with data.

use super::classification::ClassificationPolicy;
use super::normal::{self, MEAN_IQ};
use super::pipeline::{INDEX_MAX, INDEX_MIN, confidence_interval, flynn_correction};
use super::profile::ProfileAnalysis;
use super::reliability::Reliability;
use super::score_report::{DomainScore, ScoreReport};
use super::strategy::{ScoringStrategy, ScoringStrategyKind};
use crate::assessment::{CognitiveDomain, Difficulty, ResponseLog};
use std::collections::BTreeMap;

pub fn difficulty_points(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Hard => 3,
    }
}

/// Map an accuracy in 0..=1 onto the index scale
pub fn accuracy_index(accuracy: f64) -> i32 {
    ((40.0 + accuracy * 120.0).round() as i32).clamp(INDEX_MIN, INDEX_MAX)
}

#[derive(Debug, Clone)]
pub struct WeightedAccuracyScoring {
    classification: ClassificationPolicy,
}

impl Default for WeightedAccuracyScoring {
    fn default() -> Self {
        Self {
            classification: ClassificationPolicy::Simplified,
        }
    }
}

impl WeightedAccuracyScoring {
    pub fn with_classification(mut self, classification: ClassificationPolicy) -> Self {
        self.classification = classification;
        self
    }
}

impl ScoringStrategy for WeightedAccuracyScoring {
    fn kind(&self) -> ScoringStrategyKind {
        ScoringStrategyKind::WeightedAccuracy
    }

    fn score(&self, responses: &ResponseLog, user_age: u32) -> ScoreReport {
        let mut points: BTreeMap<CognitiveDomain, (u32, u32, u32)> = CognitiveDomain::ALL
            .iter()
            .map(|d| (*d, (0, 0, 0)))
            .collect();
        for response in responses.iter() {
            let entry = points.entry(response.domain).or_insert((0, 0, 0));
            let value = difficulty_points(response.difficulty);
            if response.correct {
                entry.0 += value;
            }
            entry.1 += value;
            entry.2 += 1;
        }

        let domains: BTreeMap<CognitiveDomain, DomainScore> = points
            .into_iter()
            .map(|(domain, (earned, possible, count))| {
                let accuracy = if possible > 0 {
                    earned as f64 / possible as f64
                } else {
                    0.0
                };
                let index = accuracy_index(accuracy);
                let score = DomainScore {
                    domain,
                    raw_score: accuracy * 100.0,
                    scaled_score: None,
                    composite_score: None,
                    index_score: index,
                    percentile: normal::percentile_rank(index as f64),
                    classification: self.classification.classify(index as f64),
                    response_count: count,
                    insufficient_data: count == 0,
                };
                (domain, score)
            })
            .collect();

        let with_data: BTreeMap<CognitiveDomain, i32> = domains
            .values()
            .filter(|d| !d.insufficient_data)
            .map(|d| (d.domain, d.index_score))
            .collect();

        let mean = if with_data.is_empty() {
            MEAN_IQ
        } else {
            with_data.values().map(|s| *s as f64).sum::<f64>() / with_data.len() as f64
        };
        let fsiq = (mean + flynn_correction()).clamp(INDEX_MIN as f64, INDEX_MAX as f64);
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
