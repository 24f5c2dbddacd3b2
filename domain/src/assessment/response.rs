//! Response entity and the append-only response log

use super::accumulator::DomainScoreAccumulator;
use super::{CognitiveDomain, Difficulty};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One answered item (Entity). Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub domain: CognitiveDomain,
    pub question_id: String,
    pub correct: bool,
    pub response_time_ms: u64,
    pub difficulty: Difficulty,
    /// Submission time, milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl Response {
    pub fn new(
        domain: CognitiveDomain,
        question_id: impl Into<String>,
        correct: bool,
        response_time_ms: u64,
        difficulty: Difficulty,
        timestamp: u64,
    ) -> Self {
        Self {
            domain,
            question_id: question_id.into(),
            correct,
            response_time_ms,
            difficulty,
            timestamp,
        }
    }

    /// Response time in (fractional) seconds
    pub fn response_time_secs(&self) -> f64 {
        self.response_time_ms as f64 / 1000.0
    }
}

/// Ordered, append-only record of every answered item in a session.
///
/// At most one response per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseLog {
    responses: Vec<Response>,
}

impl ResponseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from persisted responses, re-checking id uniqueness
    pub fn from_responses(responses: Vec<Response>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for response in &responses {
            if !seen.insert(response.question_id.as_str()) {
                return Err(DomainError::QuestionAlreadyAnswered(
                    response.question_id.clone(),
                ));
            }
        }
        Ok(Self { responses })
    }

    /// Append a response, returning the extended log
    pub fn record(mut self, response: Response) -> Result<Self, DomainError> {
        if self.contains(&response.question_id) {
            return Err(DomainError::QuestionAlreadyAnswered(response.question_id));
        }
        self.responses.push(response);
        Ok(self)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.responses.iter().any(|r| r.question_id == question_id)
    }

    pub fn answered_ids(&self) -> HashSet<&str> {
        self.responses
            .iter()
            .map(|r| r.question_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter()
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.responses
    }

    pub fn for_domain(&self, domain: CognitiveDomain) -> impl Iterator<Item = &Response> {
        self.responses.iter().filter(move |r| r.domain == domain)
    }

    /// The most recent `n` responses in a domain, oldest first
    pub fn recent_in_domain(&self, domain: CognitiveDomain, n: usize) -> Vec<&Response> {
        let in_domain: Vec<&Response> = self.for_domain(domain).collect();
        let start = in_domain.len().saturating_sub(n);
        in_domain[start..].to_vec()
    }

    pub fn last_in_domain(&self, domain: CognitiveDomain) -> Option<&Response> {
        self.responses.iter().rev().find(|r| r.domain == domain)
    }

    /// Rebuild every domain accumulator by replaying the log
    pub fn replay_accumulators(&self) -> BTreeMap<CognitiveDomain, DomainScoreAccumulator> {
        let mut accumulators: BTreeMap<CognitiveDomain, DomainScoreAccumulator> = BTreeMap::new();
        for response in &self.responses {
            let entry = accumulators.entry(response.domain).or_default();
            *entry = entry.clone().record(response);
        }
        accumulators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &str, domain: CognitiveDomain, correct: bool) -> Response {
        Response::new(domain, id, correct, 4000, Difficulty::Medium, 0)
    }

    #[test]
    fn test_record_rejects_duplicate_question() {
        let log = ResponseLog::new()
            .record(response("vc_m1", CognitiveDomain::VerbalComprehension, true))
            .unwrap();
        let err = log
            .record(response("vc_m1", CognitiveDomain::VerbalComprehension, false))
            .unwrap_err();
        assert_eq!(err, DomainError::QuestionAlreadyAnswered("vc_m1".to_string()));
    }

    #[test]
    fn test_recent_in_domain_is_scoped_and_chronological() {
        let mut log = ResponseLog::new();
        for (i, (domain, correct)) in [
            (CognitiveDomain::WorkingMemory, false),
            (CognitiveDomain::VerbalComprehension, true),
            (CognitiveDomain::WorkingMemory, true),
            (CognitiveDomain::WorkingMemory, true),
            (CognitiveDomain::WorkingMemory, false),
        ]
        .into_iter()
        .enumerate()
        {
            log = log.record(response(&format!("q{}", i), domain, correct)).unwrap();
        }

        let recent = log.recent_in_domain(CognitiveDomain::WorkingMemory, 3);
        let ids: Vec<_> = recent.iter().map(|r| r.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q2", "q3", "q4"]);

        let short = log.recent_in_domain(CognitiveDomain::VerbalComprehension, 3);
        assert_eq!(short.len(), 1);
        assert!(log.recent_in_domain(CognitiveDomain::FluidReasoning, 3).is_empty());
    }

    #[test]
    fn test_from_responses_checks_uniqueness() {
        let responses = vec![
            response("a", CognitiveDomain::FluidReasoning, true),
            response("a", CognitiveDomain::FluidReasoning, true),
        ];
        assert!(ResponseLog::from_responses(responses).is_err());
    }

    #[test]
    fn test_replay_accumulators() {
        let log = ResponseLog::new()
            .record(response("a", CognitiveDomain::FluidReasoning, true))
            .unwrap()
            .record(response("b", CognitiveDomain::FluidReasoning, false))
            .unwrap()
            .record(response("c", CognitiveDomain::ProcessingSpeed, true))
            .unwrap();

        let acc = log.replay_accumulators();
        assert_eq!(acc.len(), 2);
        assert_eq!(acc[&CognitiveDomain::FluidReasoning].total_count, 2);
        assert_eq!(acc[&CognitiveDomain::FluidReasoning].correct_count, 1);
        assert_eq!(acc[&CognitiveDomain::ProcessingSpeed].correct_count, 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let log = ResponseLog::new()
            .record(response("a", CognitiveDomain::FluidReasoning, true))
            .unwrap();
        let value = serde_json::to_value(&log).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["question_id"], "a");
    }
}
