//! Challenge categories - the closed set of developmental concerns
//!
//! A session traverses an ordered sequence of these. The set is closed on
//! purpose: an unrecognized category name fails at parse time instead of
//! silently resolving to an empty question page.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One axis of developmental concern being assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeCategory {
    #[serde(rename = "Social Interaction")]
    SocialInteraction,
    #[serde(rename = "Motor Skills")]
    MotorSkills,
    #[serde(rename = "Learning Difficulties")]
    LearningDifficulties,
    #[serde(rename = "Communication")]
    Communication,
    #[serde(rename = "Cognitive Skills")]
    CognitiveSkills,
    #[serde(rename = "Behavioral Issues")]
    BehavioralIssues,
}

impl ChallengeCategory {
    /// All categories, in the order the intake form presents them
    pub const ALL: [ChallengeCategory; 6] = [
        ChallengeCategory::SocialInteraction,
        ChallengeCategory::MotorSkills,
        ChallengeCategory::LearningDifficulties,
        ChallengeCategory::Communication,
        ChallengeCategory::CognitiveSkills,
        ChallengeCategory::BehavioralIssues,
    ];

    /// Display name, matching the intake form labels
    pub fn name(&self) -> &'static str {
        match self {
            ChallengeCategory::SocialInteraction => "Social Interaction",
            ChallengeCategory::MotorSkills => "Motor Skills",
            ChallengeCategory::LearningDifficulties => "Learning Difficulties",
            ChallengeCategory::Communication => "Communication",
            ChallengeCategory::CognitiveSkills => "Cognitive Skills",
            ChallengeCategory::BehavioralIssues => "Behavioral Issues",
        }
    }
}

impl std::fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChallengeCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChallengeCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}
