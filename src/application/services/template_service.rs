//! Template Service - Application service for question authoring
//!
//! Finalizes drafts into immutable records and hands them to the
//! configured repository. A persistence failure surfaces to the caller
//! with the draft intact so the author can retry.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    TemplateRepositoryError, TemplateRepositoryPort, TemplateSortKey,
};
use crate::domain::entities::{TemplateDraft, TemplateQuestion};
use crate::domain::error::DomainError;
use crate::domain::value_objects::TemplateQuestionId;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template question {0} not found")]
    NotFound(TemplateQuestionId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Persistence(#[from] TemplateRepositoryError),
}

/// Template service trait defining the authoring use cases
#[async_trait]
pub trait TemplateService: Send + Sync {
    /// Finalize a draft and persist the resulting record
    async fn create_question(&self, draft: &TemplateDraft)
        -> Result<TemplateQuestion, TemplateError>;

    /// Get a record by id
    async fn get_question(
        &self,
        id: TemplateQuestionId,
    ) -> Result<TemplateQuestion, TemplateError>;

    /// List all records in the requested order
    async fn list_questions(
        &self,
        sort: TemplateSortKey,
    ) -> Result<Vec<TemplateQuestion>, TemplateError>;

    /// Delete a record
    async fn delete_question(&self, id: TemplateQuestionId) -> Result<(), TemplateError>;
}

/// Default implementation of TemplateService using the repository port
#[derive(Clone)]
pub struct TemplateServiceImpl {
    repository: Arc<dyn TemplateRepositoryPort>,
}

impl TemplateServiceImpl {
    pub fn new(repository: Arc<dyn TemplateRepositoryPort>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TemplateService for TemplateServiceImpl {
    #[instrument(skip(self, draft))]
    async fn create_question(
        &self,
        draft: &TemplateDraft,
    ) -> Result<TemplateQuestion, TemplateError> {
        // Validation first; nothing is sent to the store for an incomplete draft
        let record = draft.finalize()?;
        self.repository.create(&record).await?;
        info!(id = %record.id, challenge = %record.challenge, "Template question created");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_question(
        &self,
        id: TemplateQuestionId,
    ) -> Result<TemplateQuestion, TemplateError> {
        self.repository
            .get(id)
            .await?
            .ok_or(TemplateError::NotFound(id))
    }

    #[instrument(skip(self))]
    async fn list_questions(
        &self,
        sort: TemplateSortKey,
    ) -> Result<Vec<TemplateQuestion>, TemplateError> {
        debug!(?sort, "Listing template questions");
        Ok(self.repository.list(sort).await?)
    }

    #[instrument(skip(self))]
    async fn delete_question(&self, id: TemplateQuestionId) -> Result<(), TemplateError> {
        if !self.repository.delete(id).await? {
            return Err(TemplateError::NotFound(id));
        }
        info!(%id, "Template question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AgeBand, ChallengeCategory, QuestionType};
    use crate::infrastructure::persistence::InMemoryTemplateRepository;

    fn service() -> TemplateServiceImpl {
        TemplateServiceImpl::new(Arc::new(InMemoryTemplateRepository::new()))
    }

    fn boolean_draft() -> TemplateDraft {
        TemplateDraft {
            challenge: Some(ChallengeCategory::BehavioralIssues),
            age_band: Some(AgeBand::EarlySchool),
            kind: Some(QuestionType::Boolean),
            question_text: "Does the child follow two-step instructions?".to_string(),
            options: Vec::new(),
        }
    }

    #[tokio::test]
    async fn created_questions_can_be_read_back() {
        let service = service();
        let record = service.create_question(&boolean_draft()).await.unwrap();

        let fetched = service.get_question(record.id).await.unwrap();
        assert_eq!(fetched.question_text, record.question_text);
        assert_eq!(fetched.options, None);
    }

    #[tokio::test]
    async fn incomplete_drafts_never_reach_the_store() {
        let service = service();
        let err = service
            .create_question(&TemplateDraft::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::Domain(DomainError::IncompleteDraft { .. })
        ));
        assert!(service
            .list_questions(TemplateSortKey::Challenge)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn listing_sorts_by_the_requested_key() {
        let service = service();
        let mut social = boolean_draft();
        social.challenge = Some(ChallengeCategory::SocialInteraction);
        let mut communication = boolean_draft();
        communication.challenge = Some(ChallengeCategory::Communication);

        service.create_question(&social).await.unwrap();
        let newest = service.create_question(&communication).await.unwrap();

        let by_challenge = service
            .list_questions(TemplateSortKey::Challenge)
            .await
            .unwrap();
        assert_eq!(
            by_challenge[0].challenge,
            ChallengeCategory::Communication
        );

        let by_created = service
            .list_questions(TemplateSortKey::CreatedAt)
            .await
            .unwrap();
        assert_eq!(by_created[0].id, newest.id);
    }

    #[tokio::test]
    async fn deleting_twice_reports_not_found() {
        let service = service();
        let record = service.create_question(&boolean_draft()).await.unwrap();

        service.delete_question(record.id).await.unwrap();
        assert!(matches!(
            service.delete_question(record.id).await,
            Err(TemplateError::NotFound(_))
        ));
    }
}
