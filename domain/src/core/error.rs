//! Domain error types

use crate::assessment::CognitiveDomain;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Duplicate question id in catalog: {0}")]
    DuplicateQuestionId(String),

    #[error("Question {0} has already been answered in this session")]
    QuestionAlreadyAnswered(String),

    #[error("Invalid age: {0} (expected 1..=120)")]
    InvalidAge(u32),

    #[error("Corrupted session state: accumulator for {domain} disagrees with the response log")]
    AccumulatorMismatch { domain: CognitiveDomain },

    #[error("Corrupted session state: domain index {index} is past the last domain")]
    DomainIndexOutOfRange { index: usize },
}

impl DomainError {
    /// Check if this error means a persisted session can't be trusted
    pub fn is_corrupted_state(&self) -> bool {
        matches!(
            self,
            DomainError::AccumulatorMismatch { .. } | DomainError::DomainIndexOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_answer_display() {
        let error = DomainError::QuestionAlreadyAnswered("vc_e1".to_string());
        assert_eq!(
            error.to_string(),
            "Question vc_e1 has already been answered in this session"
        );
    }

    #[test]
    fn test_is_corrupted_state_check() {
        assert!(
            DomainError::AccumulatorMismatch {
                domain: CognitiveDomain::WorkingMemory
            }
            .is_corrupted_state()
        );
        assert!(DomainError::DomainIndexOutOfRange { index: 9 }.is_corrupted_state());
        assert!(!DomainError::InvalidAge(0).is_corrupted_state());
        assert!(!DomainError::DuplicateQuestionId("x".to_string()).is_corrupted_state());
    }
}
