//! Per-domain running tally

use super::Difficulty;
use super::response::Response;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running tally for one domain, derived from the response log.
///
/// Never authoritative on its own: [`ResponseLog::replay_accumulators`]
/// must always reproduce it.
///
/// [`ResponseLog::replay_accumulators`]: super::ResponseLog::replay_accumulators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScoreAccumulator {
    pub correct_count: u32,
    pub total_count: u32,
    pub difficulty_histogram: BTreeMap<Difficulty, u32>,
}

impl Default for DomainScoreAccumulator {
    fn default() -> Self {
        Self {
            correct_count: 0,
            total_count: 0,
            difficulty_histogram: Difficulty::ALL.iter().map(|d| (*d, 0)).collect(),
        }
    }
}

impl DomainScoreAccumulator {
    /// Fold one more response into the tally
    pub fn record(mut self, response: &Response) -> Self {
        self.total_count += 1;
        if response.correct {
            self.correct_count += 1;
        }
        *self
            .difficulty_histogram
            .entry(response.difficulty)
            .or_insert(0) += 1;
        self
    }

    pub fn count_at(&self, difficulty: Difficulty) -> u32 {
        self.difficulty_histogram
            .get(&difficulty)
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of correct answers, `None` without responses
    pub fn accuracy(&self) -> Option<f64> {
        if self.total_count == 0 {
            None
        } else {
            Some(self.correct_count as f64 / self.total_count as f64)
        }
    }

    /// Histogram rendered as `E:1 M:3 H:2`
    pub fn histogram_label(&self) -> String {
        Difficulty::ALL
            .iter()
            .map(|d| format!("{}:{}", d.initial(), self.count_at(*d)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
