//! Domain error taxonomy
//!
//! Configuration errors mean the caller asked for something outside the
//! closed vocabularies or supplied an unusable setup; validation errors
//! mean a well-formed request carried a value the domain rejects. Store
//! availability problems live at the ports, not here.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("a session needs at least one challenge category")]
    EmptyStepSequence,

    #[error("unknown challenge category: {0}")]
    UnknownCategory(String),

    #[error("unknown age band: {0}")]
    UnknownAgeBand(String),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("subject name must not be blank")]
    BlankSubjectName,

    #[error("invalid answer for question {question_id}: {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    #[error("question {0} is not on the current page")]
    UnknownQuestion(String),

    #[error("draft is missing: {}", .missing.join(", "))]
    IncompleteDraft { missing: Vec<&'static str> },

    #[error("session is already complete")]
    SessionComplete,
}

impl DomainError {
    /// Whether this is a setup problem rather than a rejected input value
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyStepSequence
                | DomainError::UnknownCategory(_)
                | DomainError::UnknownAgeBand(_)
                | DomainError::UnknownQuestionType(_)
                | DomainError::UnknownGender(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_draft_lists_every_missing_part() {
        let err = DomainError::IncompleteDraft {
            missing: vec!["challenge", "question text"],
        };
        assert_eq!(err.to_string(), "draft is missing: challenge, question text");
    }

    #[test]
    fn vocabulary_misses_are_configuration_errors() {
        assert!(DomainError::UnknownAgeBand("4-6".into()).is_configuration());
        assert!(!DomainError::BlankSubjectName.is_configuration());
        assert!(!DomainError::SessionComplete.is_configuration());
    }
}
