//! SQLite template repository
//!
//! Durable local storage for authored template questions. Rows are written
//! in a single INSERT, so a create either lands whole or not at all.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::application::ports::outbound::{
    TemplateRepositoryError, TemplateRepositoryPort, TemplateSortKey,
};
use crate::domain::entities::TemplateQuestion;
use crate::domain::value_objects::{AgeBand, ChallengeCategory, QuestionType, TemplateQuestionId};

pub struct SqliteTemplateRepository {
    pool: SqlitePool,
}

impl SqliteTemplateRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS template_questions (
                id TEXT PRIMARY KEY,
                challenge TEXT NOT NULL,
                age_band TEXT NOT NULL,
                question_type TEXT NOT NULL,
                question_text TEXT NOT NULL,
                options TEXT,
                created_at TEXT NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<TemplateQuestion, TemplateRepositoryError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        let challenge: String = row
            .try_get("challenge")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        let age_band: String = row
            .try_get("age_band")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        let question_type: String = row
            .try_get("question_type")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        let question_text: String = row
            .try_get("question_text")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        let options: Option<String> = row
            .try_get("options")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;
        let created_at: String = row
            .try_get("created_at")
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;

        // A malformed stored row is a defined error, not a silent skip
        let corrupt =
            |what: &str| TemplateRepositoryError::Rejected(format!("corrupt stored row: {what}"));

        let options = options
            .map(|raw| serde_json::from_str::<Vec<String>>(&raw))
            .transpose()
            .map_err(|_| corrupt("options"))?;

        Ok(TemplateQuestion {
            id: Uuid::parse_str(&id)
                .map(TemplateQuestionId::from_uuid)
                .map_err(|_| corrupt("id"))?,
            challenge: challenge
                .parse::<ChallengeCategory>()
                .map_err(|_| corrupt("challenge"))?,
            age_band: age_band.parse::<AgeBand>().map_err(|_| corrupt("age band"))?,
            kind: question_type
                .parse::<QuestionType>()
                .map_err(|_| corrupt("question type"))?,
            question_text,
            options,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| corrupt("created_at"))?,
        })
    }
}

#[async_trait]
impl TemplateRepositoryPort for SqliteTemplateRepository {
    async fn create(&self, record: &TemplateQuestion) -> Result<(), TemplateRepositoryError> {
        let options = record
            .options
            .as_ref()
            .map(|opts| serde_json::to_string(opts))
            .transpose()
            .map_err(|e| TemplateRepositoryError::Rejected(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO template_questions
                (id, challenge, age_band, question_type, question_text, options, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
        )
        .bind(record.id.to_string())
        .bind(record.challenge.name())
        .bind(record.age_band.label())
        .bind(record.kind.tag())
        .bind(&record.question_text)
        .bind(options)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn get(
        &self,
        id: TemplateQuestionId,
    ) -> Result<Option<TemplateQuestion>, TemplateRepositoryError> {
        let row = sqlx::query("SELECT * FROM template_questions WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        row.map(|r| Self::record_from_row(&r)).transpose()
    }

    async fn list(
        &self,
        sort: TemplateSortKey,
    ) -> Result<Vec<TemplateQuestion>, TemplateRepositoryError> {
        let query = match sort {
            TemplateSortKey::Challenge => {
                "SELECT * FROM template_questions ORDER BY challenge ASC, created_at DESC"
            }
            TemplateSortKey::CreatedAt => {
                "SELECT * FROM template_questions ORDER BY created_at DESC"
            }
        };

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn delete(&self, id: TemplateQuestionId) -> Result<bool, TemplateRepositoryError> {
        let result = sqlx::query("DELETE FROM template_questions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| TemplateRepositoryError::Unavailable(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
