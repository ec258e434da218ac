//! Repository ports - Interfaces for template persistence
//!
//! Application services depend on these traits, not concrete adapters; the
//! core does not care whether records land in sqlite, memory or a remote
//! endpoint, only that a create either durably adds the record or fails
//! whole.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::TemplateQuestion;
use crate::domain::value_objects::TemplateQuestionId;

/// A persistence failure. Recoverable: the caller keeps the record/draft
/// and may retry or abandon.
#[derive(Debug, Error)]
pub enum TemplateRepositoryError {
    #[error("template store unavailable: {0}")]
    Unavailable(String),
    #[error("template store rejected the operation: {0}")]
    Rejected(String),
}

/// Single-key ordering for template listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateSortKey {
    /// Alphabetical by challenge name
    #[default]
    Challenge,
    /// Newest first
    CreatedAt,
}

impl TemplateSortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "challenge" => Some(TemplateSortKey::Challenge),
            "created_at" => Some(TemplateSortKey::CreatedAt),
            _ => None,
        }
    }
}

/// Repository port for finalized template questions
#[async_trait]
pub trait TemplateRepositoryPort: Send + Sync {
    /// Persist a new record atomically
    async fn create(&self, record: &TemplateQuestion) -> Result<(), TemplateRepositoryError>;

    /// Get a record by id
    async fn get(
        &self,
        id: TemplateQuestionId,
    ) -> Result<Option<TemplateQuestion>, TemplateRepositoryError>;

    /// List all records in the requested order
    async fn list(
        &self,
        sort: TemplateSortKey,
    ) -> Result<Vec<TemplateQuestion>, TemplateRepositoryError>;

    /// Delete a record; `false` when no such record existed
    async fn delete(&self, id: TemplateQuestionId) -> Result<bool, TemplateRepositoryError>;
}
