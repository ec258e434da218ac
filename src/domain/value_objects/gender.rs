//! Gender - intake form enum for the assessed child

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Male", alias = "M")]
    Male,
    #[serde(rename = "Female", alias = "F")]
    Female,
    #[serde(rename = "Other")]
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" | "M" => Ok(Gender::Male),
            "Female" | "F" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(DomainError::UnknownGender(other.to_string())),
        }
    }
}
