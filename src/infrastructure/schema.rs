//! Schema loading - bundled challenge questionnaires
//!
//! One JSON file per challenge category, keyed by age band, compiled into
//! the binary. Loading happens once at startup; a malformed file or an
//! unknown age-band key aborts the boot instead of surfacing later as a
//! mysteriously empty page.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::entities::Question;
use crate::domain::services::SchemaStore;
use crate::domain::value_objects::{AgeBand, ChallengeCategory};

/// On-disk shape of a challenge schema file
#[derive(Debug, Deserialize)]
struct ChallengeSchemaFile {
    #[serde(rename = "questionsByAgeBand")]
    questions_by_age_band: HashMap<String, Vec<Question>>,
}

/// The bundled schema files, paired with their categories
const BUNDLED: [(ChallengeCategory, &str); 6] = [
    (
        ChallengeCategory::SocialInteraction,
        include_str!("../../schema/challenges/social.json"),
    ),
    (
        ChallengeCategory::MotorSkills,
        include_str!("../../schema/challenges/motor.json"),
    ),
    (
        ChallengeCategory::LearningDifficulties,
        include_str!("../../schema/challenges/learning.json"),
    ),
    (
        ChallengeCategory::Communication,
        include_str!("../../schema/challenges/communication.json"),
    ),
    (
        ChallengeCategory::CognitiveSkills,
        include_str!("../../schema/challenges/cognitive.json"),
    ),
    (
        ChallengeCategory::BehavioralIssues,
        include_str!("../../schema/challenges/behavior.json"),
    ),
];

/// Parse the bundled challenge schemas into an immutable store
pub fn load_bundled_schemas() -> Result<SchemaStore> {
    let mut store = SchemaStore::new();
    for (category, raw) in BUNDLED {
        let file: ChallengeSchemaFile = serde_json::from_str(raw)
            .with_context(|| format!("Malformed schema file for {category}"))?;
        for (band_label, questions) in file.questions_by_age_band {
            let band: AgeBand = band_label
                .parse()
                .with_context(|| format!("Schema file for {category} uses an unknown age band"))?;
            store.insert(category, band, questions);
        }
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::QuestionType;

    #[test]
    fn bundled_schemas_parse() {
        let store = load_bundled_schemas().unwrap();
        assert!(store.pair_count() > 0);
    }

    #[test]
    fn question_ids_are_unique_within_each_schema() {
        let store = load_bundled_schemas().unwrap();
        for category in ChallengeCategory::ALL {
            let mut seen = std::collections::HashSet::new();
            for band in AgeBand::ALL {
                for question in store.questions_for(category, band) {
                    assert!(
                        seen.insert(question.id.clone()),
                        "duplicate id {} in {}",
                        question.id,
                        category
                    );
                }
            }
        }
    }

    #[test]
    fn radio_questions_always_carry_options() {
        let store = load_bundled_schemas().unwrap();
        for category in ChallengeCategory::ALL {
            for band in AgeBand::ALL {
                for question in store.questions_for(category, band) {
                    if question.kind == QuestionType::Radio {
                        assert!(
                            question.options.len() >= 2,
                            "radio question {} needs options",
                            question.id
                        );
                    } else {
                        assert!(question.options.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn infant_learning_band_is_a_valid_empty_state() {
        let store = load_bundled_schemas().unwrap();
        // The learning questionnaire intentionally starts at 3-5
        assert!(store
            .questions_for(ChallengeCategory::LearningDifficulties, AgeBand::Infant)
            .is_empty());
    }
}
