//! Final report record

use crate::adaptive::DifficultyStaircase;
use crate::assessment::{CognitiveDomain, Difficulty, DomainScoreAccumulator, SessionState};
use crate::scoring::{DomainScore, ScoreReport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the adaptive run went in one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPerformance {
    pub domain: CognitiveDomain,
    /// Tier the staircase settled on
    pub final_difficulty: Difficulty,
    pub accumulator: DomainScoreAccumulator,
    pub score: Option<DomainScore>,
}

impl DomainPerformance {
    /// Whole-number accuracy, `None` without responses
    pub fn accuracy_percent(&self) -> Option<u32> {
        self.accumulator
            .accuracy()
            .map(|a| (a * 100.0).round() as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub score: ScoreReport,
    pub performance: BTreeMap<CognitiveDomain, DomainPerformance>,
    pub duration_secs: u64,
    pub user_age: u32,
    pub total_questions: usize,
}

impl AssessmentReport {
    pub fn performance(&self, domain: CognitiveDomain) -> Option<&DomainPerformance> {
        self.performance.get(&domain)
    }

    /// Duration as `"Xm Ys"`
    pub fn duration_label(&self) -> String {
        format!("{}m {}s", self.duration_secs / 60, self.duration_secs % 60)
    }
}

/// Packages scoring output with the session's adaptive metrics
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(state: &SessionState, score: ScoreReport) -> AssessmentReport {
        let performance = CognitiveDomain::ALL
            .iter()
            .map(|domain| {
                let entry = DomainPerformance {
                    domain: *domain,
                    final_difficulty: DifficultyStaircase::current(state, *domain),
                    accumulator: state.accumulator(*domain),
                    score: score.domain(*domain).cloned(),
                };
                (*domain, entry)
            })
            .collect();

        AssessmentReport {
            performance,
            duration_secs: state.elapsed_ms / 1000,
            user_age: state.user_age,
            total_questions: state.responses.len(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Response;
    use crate::scoring::{ScientificScoring, ScoringStrategy};

    #[test]
    fn test_assemble_carries_adaptive_metrics() {
        let state = SessionState::new(16)
            .unwrap()
            .record(Response::new(
                CognitiveDomain::WorkingMemory,
                "wm1",
                true,
                2000,
                Difficulty::Medium,
                0,
            ))
            .unwrap()
            .with_difficulty(CognitiveDomain::WorkingMemory, Difficulty::Hard)
            .with_elapsed_ms(125_400);
        let score = ScientificScoring::default().score(&state.responses, state.user_age);
        let report = ReportAssembler::assemble(&state, score);

        let wm = report.performance(CognitiveDomain::WorkingMemory).unwrap();
        assert_eq!(wm.final_difficulty, Difficulty::Hard);
        assert_eq!(wm.accuracy_percent(), Some(100));
        assert!(wm.score.is_some());

        let ps = report.performance(CognitiveDomain::ProcessingSpeed).unwrap();
        assert_eq!(ps.final_difficulty, Difficulty::Medium);
        assert_eq!(ps.accuracy_percent(), None);

        assert_eq!(report.duration_label(), "2m 5s");
        assert_eq!(report.total_questions, 1);
        assert_eq!(report.user_age, 16);
    }
}
