//! Session summary - the final ordered transcript
//!
//! A pure projection of the traversed categories, their schema questions and
//! the accumulated answers into one flat report. Ordering is the contract:
//! outer loop in category traversal order (as supplied by the caller, not
//! alphabetical), inner loop in schema-defined question order.

use serde::Serialize;

use crate::domain::entities::Subject;
use crate::domain::services::{AnswerSheet, SchemaStore};
use crate::domain::value_objects::{AgeBand, ChallengeCategory};

/// One transcript line: the category, the question and the answer if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub category: ChallengeCategory,
    pub question_text: String,
    /// `None` for questions left unanswered
    pub answer: Option<String>,
}

/// The complete session transcript
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub subject: Subject,
    pub entries: Vec<SummaryEntry>,
}

/// Flatten the session into its transcript. Never mutates the sheet; the
/// same inputs always produce the same report.
pub fn build_summary(
    subject: &Subject,
    categories: &[ChallengeCategory],
    age_band: AgeBand,
    answers: &AnswerSheet,
    schema: &SchemaStore,
) -> AssessmentSummary {
    let mut entries = Vec::new();
    for &category in categories {
        for question in schema.questions_for(category, age_band) {
            entries.push(SummaryEntry {
                category,
                question_text: question.text.clone(),
                answer: answers.get(&question.id).map(str::to_string),
            });
        }
    }
    AssessmentSummary {
        subject: subject.clone(),
        entries,
    }
}
