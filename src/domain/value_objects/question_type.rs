//! Question type tags
//!
//! The variant set is fixed: radio (pick one option), boolean (Yes/No),
//! rating (1-10 scale) and free text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Radio,
    Boolean,
    Rating,
    Text,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Radio,
        QuestionType::Rating,
        QuestionType::Boolean,
        QuestionType::Text,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            QuestionType::Radio => "radio",
            QuestionType::Boolean => "boolean",
            QuestionType::Rating => "rating",
            QuestionType::Text => "text",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| DomainError::UnknownQuestionType(s.to_string()))
    }
}
