//! Read-only question catalog keyed by domain and difficulty

use super::{CognitiveDomain, Difficulty, Question};
use crate::core::error::DomainError;
use std::collections::{BTreeMap, HashSet};

type Buckets = BTreeMap<CognitiveDomain, BTreeMap<Difficulty, Vec<Question>>>;

/// The question bank, grouped into `(domain, difficulty)` buckets.
///
/// A bucket that is present but empty is a normal, depleted tier. A bucket
/// that is absent is a configuration problem, see [`missing_buckets`].
///
/// [`missing_buckets`]: QuestionCatalog::missing_buckets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionCatalog {
    buckets: Buckets,
}

impl QuestionCatalog {
    /// Build a catalog from explicit buckets, keeping empty buckets as present
    pub fn from_buckets(buckets: Buckets) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for question in buckets.values().flat_map(|tiers| tiers.values()).flatten() {
            if !seen.insert(question.id.clone()) {
                return Err(DomainError::DuplicateQuestionId(question.id.clone()));
            }
        }
        Ok(Self { buckets })
    }

    /// Build a catalog by grouping questions on their own domain and difficulty
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, DomainError> {
        let mut buckets: Buckets = BTreeMap::new();
        for question in questions {
            buckets
                .entry(question.domain)
                .or_default()
                .entry(question.difficulty)
                .or_default()
                .push(question);
        }
        Self::from_buckets(buckets)
    }

    /// Items for one tier, or `None` when the bucket is absent
    pub fn bucket(&self, domain: CognitiveDomain, difficulty: Difficulty) -> Option<&[Question]> {
        self.buckets
            .get(&domain)
            .and_then(|tiers| tiers.get(&difficulty))
            .map(Vec::as_slice)
    }

    /// Every `(domain, difficulty)` pair with no bucket at all
    pub fn missing_buckets(&self) -> Vec<(CognitiveDomain, Difficulty)> {
        CognitiveDomain::ALL
            .iter()
            .flat_map(|domain| Difficulty::ALL.iter().map(move |diff| (*domain, *diff)))
            .filter(|(domain, diff)| self.bucket(*domain, *diff).is_none())
            .collect()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.iter().find(|q| q.id == question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.buckets
            .values()
            .flat_map(|tiers| tiers.values())
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn domain_len(&self, domain: CognitiveDomain) -> usize {
        self.buckets
            .get(&domain)
            .map(|tiers| tiers.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AnswerKey;

    fn q(id: &str, domain: CognitiveDomain, difficulty: Difficulty) -> Question {
        Question::new(id, domain, difficulty, AnswerKey::Option(0))
    }

    #[test]
    fn test_from_questions_groups_by_bucket() {
        let catalog = QuestionCatalog::from_questions(vec![
            q("vc_e1", CognitiveDomain::VerbalComprehension, Difficulty::Easy),
            q("vc_e2", CognitiveDomain::VerbalComprehension, Difficulty::Easy),
            q("vc_h1", CognitiveDomain::VerbalComprehension, Difficulty::Hard),
        ])
        .unwrap();

        assert_eq!(
            catalog
                .bucket(CognitiveDomain::VerbalComprehension, Difficulty::Easy)
                .map(|b| b.len()),
            Some(2)
        );
        assert!(
            catalog
                .bucket(CognitiveDomain::VerbalComprehension, Difficulty::Medium)
                .is_none()
        );
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.domain_len(CognitiveDomain::VerbalComprehension), 3);
        assert!(catalog.get("vc_h1").is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = QuestionCatalog::from_questions(vec![
            q("dup", CognitiveDomain::WorkingMemory, Difficulty::Easy),
            q("dup", CognitiveDomain::FluidReasoning, Difficulty::Hard),
        ])
        .unwrap_err();
        assert_eq!(err, DomainError::DuplicateQuestionId("dup".to_string()));
    }

    #[test]
    fn test_empty_bucket_is_not_missing() {
        let mut tiers = BTreeMap::new();
        tiers.insert(Difficulty::Easy, Vec::new());
        let mut buckets = BTreeMap::new();
        buckets.insert(CognitiveDomain::ProcessingSpeed, tiers);
        let catalog = QuestionCatalog::from_buckets(buckets).unwrap();

        let missing = catalog.missing_buckets();
        assert!(!missing.contains(&(CognitiveDomain::ProcessingSpeed, Difficulty::Easy)));
        assert!(missing.contains(&(CognitiveDomain::ProcessingSpeed, Difficulty::Hard)));
        assert_eq!(missing.len(), 14);
    }
}
