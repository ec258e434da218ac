//! Question entity - one item of a challenge questionnaire
//!
//! Questions are read-only reference data sourced from the bundled schema
//! files. The entity also owns the answer-domain check for its type: the
//! accumulator delegates here so validation always sees the option set.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::QuestionType;

/// Fixed option set presented for boolean questions
pub const BOOLEAN_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Inclusive rating scale bounds
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

/// A single question within a `(category, age band)` schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique within its owning schema
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Ordered choices; populated for radio questions only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            options: Vec::new(),
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Check a response value against this question's answer domain.
    ///
    /// Radio and boolean answers must be a member of the option set; ratings
    /// must be an integer string within the 1-10 scale (never clamped); text
    /// accepts any string. Rejection leaves no trace anywhere.
    pub fn validate_response(&self, value: &str) -> Result<(), DomainError> {
        match self.kind {
            QuestionType::Radio => {
                if self.options.iter().any(|opt| opt == value) {
                    Ok(())
                } else {
                    Err(self.rejected(format!("\"{}\" is not one of the options", value)))
                }
            }
            QuestionType::Boolean => {
                if BOOLEAN_OPTIONS.contains(&value) {
                    Ok(())
                } else {
                    Err(self.rejected(format!("\"{}\" is not Yes or No", value)))
                }
            }
            QuestionType::Rating => match value.parse::<u8>() {
                Ok(n) if (RATING_MIN..=RATING_MAX).contains(&n) => Ok(()),
                Ok(n) => Err(self.rejected(format!("rating {} is outside 1-10", n))),
                Err(_) => Err(self.rejected(format!("\"{}\" is not a rating", value))),
            },
            QuestionType::Text => Ok(()),
        }
    }

    fn rejected(&self, reason: String) -> DomainError {
        DomainError::InvalidAnswer {
            question_id: self.id.clone(),
            reason,
        }
    }
}
