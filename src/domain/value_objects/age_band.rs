//! Age bands - coarse age brackets used to select the applicable question set

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "0-2")]
    Infant,
    #[serde(rename = "3-5")]
    Preschool,
    #[serde(rename = "6-8")]
    EarlySchool,
    #[serde(rename = "9-12")]
    Preteen,
}

impl AgeBand {
    pub const ALL: [AgeBand; 4] = [
        AgeBand::Infant,
        AgeBand::Preschool,
        AgeBand::EarlySchool,
        AgeBand::Preteen,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Infant => "0-2",
            AgeBand::Preschool => "3-5",
            AgeBand::EarlySchool => "6-8",
            AgeBand::Preteen => "9-12",
        }
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeBand::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| DomainError::UnknownAgeBand(s.to_string()))
    }
}
