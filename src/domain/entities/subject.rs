//! Subject entity - the child being assessed
//!
//! Supplied by the intake form as session input and immutable once the
//! session starts.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{AgeBand, Gender};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub gender: Gender,
    pub age_band: AgeBand,
}

impl Subject {
    /// Build a subject, rejecting a blank name up front the way the intake
    /// form refuses to continue with incomplete fields
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        age_band: AgeBand,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::BlankSubjectName);
        }
        Ok(Self {
            name,
            gender,
            age_band,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            Subject::new("   ", Gender::Other, AgeBand::Preschool).unwrap_err(),
            DomainError::BlankSubjectName
        );
        assert!(Subject::new("Alex", Gender::Male, AgeBand::Preschool).is_ok());
    }
}
