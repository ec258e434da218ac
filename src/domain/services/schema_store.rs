//! Schema store - immutable (category, age band) -> question list lookup
//!
//! Loaded once at startup from the bundled schema files and shared
//! process-wide behind an `Arc`. Lookup is pure and total: a pair with no
//! questions resolves to an empty slice, which the UI renders as a valid
//! "no questions for this age group" state.

use std::collections::HashMap;

use crate::domain::entities::Question;
use crate::domain::value_objects::{AgeBand, ChallengeCategory};

#[derive(Debug, Default)]
pub struct SchemaStore {
    questions: HashMap<(ChallengeCategory, AgeBand), Vec<Question>>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the ordered question list for a pair. Later inserts for the
    /// same pair replace earlier ones.
    pub fn insert(&mut self, category: ChallengeCategory, band: AgeBand, questions: Vec<Question>) {
        self.questions.insert((category, band), questions);
    }

    /// The ordered questions for a pair; an absent pair is an empty list,
    /// never an error
    pub fn questions_for(&self, category: ChallengeCategory, band: AgeBand) -> &[Question] {
        self.questions
            .get(&(category, band))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of (category, age band) pairs with registered questions
    pub fn pair_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::QuestionType;

    #[test]
    fn missing_pairs_resolve_to_an_empty_list() {
        let store = SchemaStore::new();
        assert!(store
            .questions_for(ChallengeCategory::Communication, AgeBand::Infant)
            .is_empty());
    }

    #[test]
    fn lookup_preserves_schema_order() {
        let mut store = SchemaStore::new();
        store.insert(
            ChallengeCategory::MotorSkills,
            AgeBand::Preschool,
            vec![
                Question::new("m1", "Can hop on one foot?", QuestionType::Boolean),
                Question::new("m2", "Pencil grip control?", QuestionType::Rating),
            ],
        );

        let qs = store.questions_for(ChallengeCategory::MotorSkills, AgeBand::Preschool);
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].id, "m1");
        assert_eq!(qs[1].id, "m2");
    }
}
