//! Template question - a finalized, persisted authoring record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AgeBand, ChallengeCategory, QuestionType, TemplateQuestionId};

/// An immutable question record produced by finalizing a draft.
///
/// `options` is present for radio questions only; other types serialize
/// without the field entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateQuestion {
    pub id: TemplateQuestionId,
    pub challenge: ChallengeCategory,
    pub age_band: AgeBand,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_radio_records_serialize_without_options() {
        let record = TemplateQuestion {
            id: TemplateQuestionId::new(),
            challenge: ChallengeCategory::Communication,
            age_band: AgeBand::Preschool,
            kind: QuestionType::Text,
            question_text: "Describe a typical mealtime.".to_string(),
            options: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], "text");
        assert_eq!(json["challenge"], "Communication");
    }

    #[test]
    fn radio_records_keep_their_option_order() {
        let record = TemplateQuestion {
            id: TemplateQuestionId::new(),
            challenge: ChallengeCategory::MotorSkills,
            age_band: AgeBand::EarlySchool,
            kind: QuestionType::Radio,
            question_text: "Preferred hand?".to_string(),
            options: Some(vec!["Left".to_string(), "Right".to_string()]),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["options"][0], "Left");
        assert_eq!(json["options"][1], "Right");
    }
}
