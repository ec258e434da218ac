//! Answer sheet - the per-session answer accumulator
//!
//! A keyed map of question id to response string. Recording validates the
//! value against the owning question's type before anything is written, so
//! a rejected value leaves the sheet exactly as it was.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Question;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: BTreeMap<String, String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a response for a question. Insertion overwrites any earlier
    /// answer for the same id; validation happens before the write.
    pub fn record(&mut self, question: &Question, value: &str) -> Result<(), DomainError> {
        question.validate_response(value)?;
        self.answers.insert(question.id.clone(), value.to_string());
        Ok(())
    }

    /// The stored value, or `None` for an unanswered question. Never fails.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::QuestionType;

    fn rating_question() -> Question {
        Question::new("q1", "How focused is the child?", QuestionType::Rating)
    }

    #[test]
    fn recording_overwrites_previous_answers() {
        let mut sheet = AnswerSheet::new();
        let q = rating_question();

        sheet.record(&q, "3").unwrap();
        sheet.record(&q, "7").unwrap();

        assert_eq!(sheet.get("q1"), Some("7"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn recording_is_idempotent() {
        let mut once = AnswerSheet::new();
        let mut twice = AnswerSheet::new();
        let q = rating_question();

        once.record(&q, "5").unwrap();
        twice.record(&q, "5").unwrap();
        twice.record(&q, "5").unwrap();

        assert_eq!(once.get("q1"), twice.get("q1"));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn rejected_values_leave_the_sheet_untouched() {
        let mut sheet = AnswerSheet::new();
        let q = rating_question();
        sheet.record(&q, "4").unwrap();

        let err = sheet.record(&q, "11").unwrap_err();
        assert!(matches!(err, DomainError::InvalidAnswer { .. }));
        assert_eq!(sheet.get("q1"), Some("4"));
    }

    #[test]
    fn unanswered_questions_read_as_none() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.get("missing"), None);
    }
}
