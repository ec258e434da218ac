//! Remote template repository
//!
//! Adapter for a hosted REST API holding the template records. The wire
//! format is the serialized `TemplateQuestion` itself; sorting is applied
//! locally since the endpoint offers no ordering contract.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::ports::outbound::{
    TemplateRepositoryError, TemplateRepositoryPort, TemplateSortKey,
};
use crate::domain::entities::TemplateQuestion;
use crate::domain::value_objects::TemplateQuestionId;

use super::sort_records;

pub struct RemoteTemplateRepository {
    client: Client,
    base_url: String,
}

impl RemoteTemplateRepository {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn questions_url(&self) -> String {
        format!("{}/questions", self.base_url)
    }

    fn question_url(&self, id: TemplateQuestionId) -> String {
        format!("{}/questions/{}", self.base_url, id)
    }
}

#[async_trait]
impl TemplateRepositoryPort for RemoteTemplateRepository {
    async fn create(&self, record: &TemplateQuestion) -> Result<(), TemplateRepositoryError> {
        let response = self
            .client
            .post(self.questions_url())
            .json(record)
            .send()
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TemplateRepositoryError::Rejected(format!(
                "{status}: {body}"
            )));
        }
        Ok(())
    }

    async fn get(
        &self,
        id: TemplateQuestionId,
    ) -> Result<Option<TemplateQuestion>, TemplateRepositoryError> {
        let response = self
            .client
            .get(self.question_url(id))
            .send()
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(TemplateRepositoryError::Rejected(
                response.status().to_string(),
            ));
        }
        let record = response
            .json::<TemplateQuestion>()
            .await
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        Ok(Some(record))
    }

    async fn list(
        &self,
        sort: TemplateSortKey,
    ) -> Result<Vec<TemplateQuestion>, TemplateRepositoryError> {
        let response = self
            .client
            .get(self.questions_url())
            .send()
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TemplateRepositoryError::Rejected(
                response.status().to_string(),
            ));
        }
        let mut records = response
            .json::<Vec<TemplateQuestion>>()
            .await
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        sort_records(&mut records, sort);
        Ok(records)
    }

    async fn delete(&self, id: TemplateQuestionId) -> Result<bool, TemplateRepositoryError> {
        let response = self
            .client
            .delete(self.question_url(id))
            .send()
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(TemplateRepositoryError::Rejected(
                response.status().to_string(),
            ));
        }
        Ok(true)
    }
}
