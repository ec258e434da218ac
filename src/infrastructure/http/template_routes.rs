//! Template question API routes
//!
//! Template questions are authored through a four-part draft (challenge,
//! age band, question type, content) that is only persisted once complete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::outbound::TemplateSortKey;
use crate::application::services::{TemplateError, TemplateService};
use crate::domain::entities::{TemplateDraft, TemplateQuestion};
use crate::domain::error::DomainError;
use crate::domain::value_objects::{AgeBand, ChallengeCategory, QuestionType, TemplateQuestionId};
use crate::infrastructure::state::AppState;

use super::assessment_routes::domain_error;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a template question from a draft
///
/// Missing selections are reported back as an incomplete-draft error rather
/// than silently defaulted.
#[derive(Debug, Deserialize)]
pub struct CreateTemplateQuestionRequest {
    pub challenge: Option<String>,
    pub age_band: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListTemplateQuestionsParams {
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateQuestionResponse {
    pub id: String,
    pub challenge: &'static str,
    pub age_band: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub question_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl From<TemplateQuestion> for TemplateQuestionResponse {
    fn from(record: TemplateQuestion) -> Self {
        Self {
            id: record.id.to_string(),
            challenge: record.challenge.name(),
            age_band: record.age_band.label(),
            kind: record.kind.tag(),
            question_text: record.question_text,
            options: record.options,
            created_at: record.created_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn create_template_question(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTemplateQuestionRequest>,
) -> Result<(StatusCode, Json<TemplateQuestionResponse>), (StatusCode, String)> {
    let draft = draft_from_request(request)?;
    let record = state
        .template_service
        .create_question(&draft)
        .await
        .map_err(template_error)?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn list_template_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTemplateQuestionsParams>,
) -> Result<Json<Vec<TemplateQuestionResponse>>, (StatusCode, String)> {
    let sort = match params.sort.as_deref() {
        Some(raw) => TemplateSortKey::parse(raw).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unknown sort key: {}", raw),
            )
        })?,
        None => TemplateSortKey::default(),
    };

    let records = state
        .template_service
        .list_questions(sort)
        .await
        .map_err(template_error)?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

pub async fn get_template_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TemplateQuestionResponse>, (StatusCode, String)> {
    let id = parse_template_id(&id)?;
    let record = state
        .template_service
        .get_question(id)
        .await
        .map_err(template_error)?;
    Ok(Json(record.into()))
}

pub async fn delete_template_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_template_id(&id)?;
    state
        .template_service
        .delete_question(id)
        .await
        .map_err(template_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Conversion and error mapping
// ============================================================================

fn draft_from_request(
    request: CreateTemplateQuestionRequest,
) -> Result<TemplateDraft, (StatusCode, String)> {
    let challenge = parse_selection::<ChallengeCategory>(request.challenge)?;
    let age_band = parse_selection::<AgeBand>(request.age_band)?;
    let kind = parse_selection::<QuestionType>(request.kind)?;

    let mut draft = TemplateDraft::new();
    draft.challenge = challenge;
    draft.age_band = age_band;
    draft.kind = kind;
    draft.question_text = request.question_text;
    draft.options = request.options;
    Ok(draft)
}

/// Absent or blank selections stay unset so the draft reports them as
/// missing; present but unrecognized values are rejected outright.
fn parse_selection<T>(raw: Option<String>) -> Result<Option<T>, (StatusCode, String)>
where
    T: std::str::FromStr<Err = DomainError>,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|err: DomainError| (StatusCode::BAD_REQUEST, err.to_string())),
    }
}

fn parse_template_id(raw: &str) -> Result<TemplateQuestionId, (StatusCode, String)> {
    Uuid::parse_str(raw)
        .map(TemplateQuestionId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid question ID".to_string()))
}

fn template_error(err: TemplateError) -> (StatusCode, String) {
    match err {
        TemplateError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        TemplateError::Domain(domain) => domain_error(domain),
        TemplateError::Persistence(persistence) => {
            (StatusCode::BAD_GATEWAY, persistence.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_selections_stay_unset() {
        let request = CreateTemplateQuestionRequest {
            challenge: Some("  ".to_string()),
            age_band: None,
            kind: Some("text".to_string()),
            question_text: "Describe a typical day.".to_string(),
            options: vec![],
        };
        let draft = draft_from_request(request).unwrap();
        assert!(draft.challenge.is_none());
        assert!(draft.age_band.is_none());
        assert_eq!(draft.kind, Some(QuestionType::Text));
    }

    #[test]
    fn unrecognized_challenge_is_rejected() {
        let request = CreateTemplateQuestionRequest {
            challenge: Some("Time Travel".to_string()),
            age_band: Some("3-5".to_string()),
            kind: Some("radio".to_string()),
            question_text: "Pick one.".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
        };
        let err = draft_from_request(request).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn text_records_serialize_without_options() {
        let record = TemplateQuestion {
            id: TemplateQuestionId::new(),
            challenge: ChallengeCategory::Communication,
            age_band: AgeBand::Preschool,
            kind: QuestionType::Text,
            question_text: "Describe a typical day.".to_string(),
            options: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(TemplateQuestionResponse::from(record)).unwrap();
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], "text");
    }
}
