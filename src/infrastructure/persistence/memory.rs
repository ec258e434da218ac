//! In-memory template repository
//!
//! Backing store for tests and for running without any external storage
//! configured. Everything is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{
    TemplateRepositoryError, TemplateRepositoryPort, TemplateSortKey,
};
use crate::domain::entities::TemplateQuestion;
use crate::domain::value_objects::TemplateQuestionId;

use super::sort_records;

#[derive(Debug, Default)]
pub struct InMemoryTemplateRepository {
    records: RwLock<HashMap<TemplateQuestionId, TemplateQuestion>>,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateRepositoryPort for InMemoryTemplateRepository {
    async fn create(&self, record: &TemplateQuestion) -> Result<(), TemplateRepositoryError> {
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn get(
        &self,
        id: TemplateQuestionId,
    ) -> Result<Option<TemplateQuestion>, TemplateRepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn list(
        &self,
        sort: TemplateSortKey,
    ) -> Result<Vec<TemplateQuestion>, TemplateRepositoryError> {
        let records = self.records.read().await;
        let mut all: Vec<TemplateQuestion> = records.values().cloned().collect();
        sort_records(&mut all, sort);
        Ok(all)
    }

    async fn delete(&self, id: TemplateQuestionId) -> Result<bool, TemplateRepositoryError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}
