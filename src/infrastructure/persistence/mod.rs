//! Persistence adapters for the template repository port

mod factory;
mod memory;
mod remote;
mod sqlite;

pub use factory::create_template_repository;
pub use memory::InMemoryTemplateRepository;
pub use remote::RemoteTemplateRepository;
pub use sqlite::SqliteTemplateRepository;

use crate::application::ports::outbound::TemplateSortKey;
use crate::domain::entities::TemplateQuestion;

/// Single-key ordering shared by the adapters that sort in memory:
/// alphabetical by challenge name, or newest first
pub(crate) fn sort_records(records: &mut [TemplateQuestion], sort: TemplateSortKey) {
    match sort {
        TemplateSortKey::Challenge => {
            records.sort_by(|a, b| {
                a.challenge
                    .name()
                    .cmp(b.challenge.name())
                    .then(b.created_at.cmp(&a.created_at))
            });
        }
        TemplateSortKey::CreatedAt => {
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::domain::value_objects::{
        AgeBand, ChallengeCategory, QuestionType, TemplateQuestionId,
    };

    fn record(challenge: ChallengeCategory, age_minutes: i64) -> TemplateQuestion {
        TemplateQuestion {
            id: TemplateQuestionId::new(),
            challenge,
            age_band: AgeBand::Preschool,
            kind: QuestionType::Text,
            question_text: "placeholder".to_string(),
            options: None,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn challenge_sort_is_alphabetical_by_display_name() {
        let mut records = vec![
            record(ChallengeCategory::SocialInteraction, 0),
            record(ChallengeCategory::BehavioralIssues, 0),
            record(ChallengeCategory::Communication, 0),
        ];
        sort_records(&mut records, TemplateSortKey::Challenge);

        let names: Vec<&str> = records.iter().map(|r| r.challenge.name()).collect();
        assert_eq!(
            names,
            vec!["Behavioral Issues", "Communication", "Social Interaction"]
        );
    }

    #[test]
    fn created_sort_is_newest_first() {
        let mut records = vec![
            record(ChallengeCategory::Communication, 30),
            record(ChallengeCategory::Communication, 5),
            record(ChallengeCategory::Communication, 60),
        ];
        sort_records(&mut records, TemplateSortKey::CreatedAt);

        assert!(records[0].created_at > records[1].created_at);
        assert!(records[1].created_at > records[2].created_at);
    }
}
