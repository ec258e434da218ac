//! Template draft - in-progress question authoring state
//!
//! A draft is built across the four wizard steps (challenge, age band,
//! question type, question content) and only becomes a `TemplateQuestion`
//! through `finalize`. A failed finalize leaves the draft untouched so the
//! author can correct it and retry.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::entities::TemplateQuestion;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{AgeBand, ChallengeCategory, QuestionType, TemplateQuestionId};

/// The ordered steps of the authoring wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStep {
    Challenge,
    AgeBand,
    QuestionType,
    Content,
}

impl DraftStep {
    /// Wizard traversal order
    pub const SEQUENCE: [DraftStep; 4] = [
        DraftStep::Challenge,
        DraftStep::AgeBand,
        DraftStep::QuestionType,
        DraftStep::Content,
    ];
}

/// Minimum surviving options for a radio question after trimming
pub const MIN_RADIO_OPTIONS: usize = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub challenge: Option<ChallengeCategory>,
    pub age_band: Option<AgeBand>,
    pub kind: Option<QuestionType>,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl TemplateDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-step validity rule, the gate the wizard's Next button reflects
    pub fn step_complete(&self, step: DraftStep) -> bool {
        match step {
            DraftStep::Challenge => self.challenge.is_some(),
            DraftStep::AgeBand => self.age_band.is_some(),
            DraftStep::QuestionType => self.kind.is_some(),
            DraftStep::Content => {
                !self.question_text.trim().is_empty()
                    && (self.kind != Some(QuestionType::Radio)
                        || self.trimmed_options().len() >= MIN_RADIO_OPTIONS)
            }
        }
    }

    /// Options with surrounding whitespace removed and empties dropped
    pub fn trimmed_options(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Convert the draft into an immutable record with generated id and
    /// creation timestamp. Fails with every missing requirement listed.
    pub fn finalize(&self) -> Result<TemplateQuestion, DomainError> {
        let mut missing = Vec::new();
        if self.challenge.is_none() {
            missing.push("challenge");
        }
        if self.age_band.is_none() {
            missing.push("age band");
        }
        if self.kind.is_none() {
            missing.push("question type");
        }
        if self.question_text.trim().is_empty() {
            missing.push("question text");
        }
        let trimmed = self.trimmed_options();
        if self.kind == Some(QuestionType::Radio) && trimmed.len() < MIN_RADIO_OPTIONS {
            missing.push("at least 2 options");
        }
        if !missing.is_empty() {
            return Err(DomainError::IncompleteDraft { missing });
        }

        let kind = self.kind.unwrap();
        Ok(TemplateQuestion {
            id: TemplateQuestionId::new(),
            challenge: self.challenge.unwrap(),
            age_band: self.age_band.unwrap(),
            kind,
            question_text: self.question_text.trim().to_string(),
            options: (kind == QuestionType::Radio).then_some(trimmed),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_text_draft() -> TemplateDraft {
        TemplateDraft {
            challenge: Some(ChallengeCategory::Communication),
            age_band: Some(AgeBand::Preschool),
            kind: Some(QuestionType::Text),
            question_text: "Describe a typical mealtime.".to_string(),
            options: Vec::new(),
        }
    }

    #[test]
    fn steps_unlock_in_order() {
        let mut draft = TemplateDraft::new();
        assert!(!draft.step_complete(DraftStep::Challenge));

        draft.challenge = Some(ChallengeCategory::MotorSkills);
        assert!(draft.step_complete(DraftStep::Challenge));
        assert!(!draft.step_complete(DraftStep::AgeBand));

        draft.age_band = Some(AgeBand::Infant);
        draft.kind = Some(QuestionType::Boolean);
        draft.question_text = "Can the child grasp small objects?".to_string();
        assert!(draft.step_complete(DraftStep::Content));
    }

    #[test]
    fn finalize_lists_every_missing_field() {
        let err = TemplateDraft::new().finalize().unwrap_err();
        match err {
            DomainError::IncompleteDraft { missing } => {
                assert_eq!(
                    missing,
                    vec!["challenge", "age band", "question type", "question text"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn radio_requires_two_options_after_trimming() {
        let mut draft = valid_text_draft();
        draft.kind = Some(QuestionType::Radio);
        draft.options = vec!["".to_string(), "A".to_string(), "  ".to_string()];

        let err = draft.finalize().unwrap_err();
        assert_eq!(
            err,
            DomainError::IncompleteDraft {
                missing: vec!["at least 2 options"]
            }
        );

        draft.options.push(" B ".to_string());
        let record = draft.finalize().unwrap();
        assert_eq!(record.options, Some(vec!["A".to_string(), "B".to_string()]));
    }

    #[test]
    fn text_records_carry_no_options() {
        let mut draft = valid_text_draft();
        // Stray option input from an earlier radio selection is discarded
        draft.options = vec!["leftover".to_string()];

        let record = draft.finalize().unwrap();
        assert_eq!(record.options, None);
        assert_eq!(record.kind, QuestionType::Text);
    }
}
