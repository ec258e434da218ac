//! Assessment session aggregate
//!
//! The explicit session object: subject, the category cursor and the answer
//! sheet, owned as one unit and passed by handle to every operation. All
//! state lives here rather than in ambient process-wide storage.

use crate::domain::entities::{Question, Subject};
use crate::domain::error::DomainError;
use crate::domain::services::{
    build_summary, Advance, AnswerSheet, AssessmentSummary, Retreat, SchemaStore, StepMachine,
};
use crate::domain::value_objects::ChallengeCategory;

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    subject: Subject,
    cursor: StepMachine<ChallengeCategory>,
    answers: AnswerSheet,
}

impl AssessmentSession {
    /// Start a session over the caller-selected category sequence. The
    /// sequence is traversed in the order given, duplicates and all; an
    /// empty sequence refuses construction.
    pub fn new(subject: Subject, categories: Vec<ChallengeCategory>) -> Result<Self, DomainError> {
        Ok(Self {
            subject,
            cursor: StepMachine::new(categories)?,
            answers: AnswerSheet::new(),
        })
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn categories(&self) -> &[ChallengeCategory] {
        self.cursor.steps()
    }

    pub fn current_category(&self) -> ChallengeCategory {
        *self.cursor.current()
    }

    pub fn category_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn category_count(&self) -> usize {
        self.cursor.step_count()
    }

    /// Whether the session has reached its summary
    pub fn is_complete(&self) -> bool {
        self.cursor.is_terminal()
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Questions for the current category page
    pub fn current_questions<'a>(&self, schema: &'a SchemaStore) -> &'a [Question] {
        schema.questions_for(self.current_category(), self.subject.age_band)
    }

    /// Record an answer against a question on the current page. Fails when
    /// the id is not on this page or the value is outside the question's
    /// domain; either way the sheet keeps its previous state.
    pub fn record_answer(
        &mut self,
        schema: &SchemaStore,
        question_id: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::SessionComplete);
        }
        let question = self
            .current_questions(schema)
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| DomainError::UnknownQuestion(question_id.to_string()))?
            .clone();
        self.answers.record(&question, value)
    }

    /// Move to the next category, or to the summary from the last one.
    /// Category pages carry no per-page requirement (answers are optional),
    /// so the gate is always open.
    pub fn advance(&mut self) -> Result<Advance, DomainError> {
        if self.is_complete() {
            return Err(DomainError::SessionComplete);
        }
        Ok(self.cursor.advance(|_| true))
    }

    /// Move back one category; `Exited` from the first category means the
    /// caller abandons the session and all accumulated state with it.
    pub fn retreat(&mut self) -> Result<Retreat, DomainError> {
        if self.is_complete() {
            return Err(DomainError::SessionComplete);
        }
        Ok(self.cursor.retreat())
    }

    /// The full transcript in traversal order
    pub fn summary(&self, schema: &SchemaStore) -> AssessmentSummary {
        build_summary(
            &self.subject,
            self.cursor.steps(),
            self.subject.age_band,
            &self.answers,
            schema,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AgeBand, Gender, QuestionType};

    fn schema() -> SchemaStore {
        let mut store = SchemaStore::new();
        store.insert(
            ChallengeCategory::Communication,
            AgeBand::Preschool,
            vec![Question::new(
                "q1",
                "Does the child respond to their name?",
                QuestionType::Boolean,
            )],
        );
        store.insert(
            ChallengeCategory::MotorSkills,
            AgeBand::Preschool,
            vec![Question::new(
                "q2",
                "How steady is the child's walking?",
                QuestionType::Rating,
            )],
        );
        store
    }

    fn session() -> AssessmentSession {
        let subject = Subject::new("Alex", Gender::Male, AgeBand::Preschool).unwrap();
        AssessmentSession::new(
            subject,
            vec![
                ChallengeCategory::Communication,
                ChallengeCategory::MotorSkills,
            ],
        )
        .unwrap()
    }

    #[test]
    fn empty_category_lists_refuse_to_start() {
        let subject = Subject::new("Alex", Gender::Male, AgeBand::Preschool).unwrap();
        assert_eq!(
            AssessmentSession::new(subject, Vec::new()).unwrap_err(),
            DomainError::EmptyStepSequence
        );
    }

    #[test]
    fn answers_only_land_on_the_current_page() {
        let store = schema();
        let mut session = session();

        session.record_answer(&store, "q1", "Yes").unwrap();
        // q2 belongs to the Motor Skills page, not the current one
        assert_eq!(
            session.record_answer(&store, "q2", "5").unwrap_err(),
            DomainError::UnknownQuestion("q2".to_string())
        );

        session.advance().unwrap();
        session.record_answer(&store, "q2", "5").unwrap();
    }

    #[test]
    fn full_traversal_produces_the_transcript_in_order() {
        let store = schema();
        let mut session = session();

        session.record_answer(&store, "q1", "Yes").unwrap();
        assert_eq!(session.advance().unwrap(), Advance::Moved);
        // q2 left unanswered
        assert_eq!(session.advance().unwrap(), Advance::Finished);
        assert!(session.is_complete());

        let summary = session.summary(&store);
        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.entries[0].category, ChallengeCategory::Communication);
        assert_eq!(summary.entries[0].answer.as_deref(), Some("Yes"));
        assert_eq!(summary.entries[1].category, ChallengeCategory::MotorSkills);
        assert_eq!(summary.entries[1].answer, None);
    }

    #[test]
    fn completed_sessions_freeze_their_answers() {
        let store = schema();
        let mut session = session();
        session.advance().unwrap();
        session.advance().unwrap();

        assert_eq!(
            session.record_answer(&store, "q2", "5").unwrap_err(),
            DomainError::SessionComplete
        );
        assert_eq!(session.advance().unwrap_err(), DomainError::SessionComplete);
        assert_eq!(session.retreat().unwrap_err(), DomainError::SessionComplete);
    }

    #[test]
    fn retreating_from_the_first_category_exits() {
        let mut session = session();
        assert_eq!(session.retreat().unwrap(), Retreat::Exited);

        session.advance().unwrap();
        assert_eq!(session.retreat().unwrap(), Retreat::Moved);
        assert_eq!(session.current_category(), ChallengeCategory::Communication);
    }
}
