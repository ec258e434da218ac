//! Assessment session API routes
//!
//! The session flow: start with subject + selected challenges, record
//! answers page by page, advance to the summary, or retreat back out.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::{
    RecordedAnswer, SessionError, SessionPage, SessionProgress, SessionService,
};
use crate::domain::entities::{Question, Subject};
use crate::domain::error::DomainError;
use crate::domain::services::{AssessmentSummary, SummaryEntry};
use crate::domain::value_objects::{AgeBand, ChallengeCategory, Gender, SessionId};
use crate::infrastructure::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to start an assessment session
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub name: String,
    pub gender: String,
    pub age_band: String,
    /// Challenge categories in the order they should be traversed
    pub challenges: Vec<String>,
}

/// Request to record one answer on the current page
#[derive(Debug, Deserialize)]
pub struct RecordAnswerRequest {
    pub question_id: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub name: String,
    pub gender: &'static str,
    pub age_band: &'static str,
}

impl From<Subject> for SubjectResponse {
    fn from(s: Subject) -> Self {
        Self {
            name: s.name,
            gender: s.gender.label(),
            age_band: s.age_band.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            kind: q.kind.tag(),
            options: q.options,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordedAnswerResponse {
    pub question_id: String,
    pub value: String,
}

impl From<RecordedAnswer> for RecordedAnswerResponse {
    fn from(a: RecordedAnswer) -> Self {
        Self {
            question_id: a.question_id,
            value: a.value,
        }
    }
}

/// The current category page of a session
#[derive(Debug, Serialize)]
pub struct SessionPageResponse {
    pub session_id: String,
    pub subject: SubjectResponse,
    pub category: &'static str,
    pub category_index: usize,
    pub category_count: usize,
    pub questions: Vec<QuestionResponse>,
    pub answers: Vec<RecordedAnswerResponse>,
}

impl From<SessionPage> for SessionPageResponse {
    fn from(page: SessionPage) -> Self {
        Self {
            session_id: page.session_id.to_string(),
            subject: page.subject.into(),
            category: page.category.name(),
            category_index: page.category_index,
            category_count: page.category_count,
            questions: page.questions.into_iter().map(Into::into).collect(),
            answers: page.answers.into_iter().map(Into::into).collect(),
        }
    }
}

/// One transcript line; unanswered questions render as "No answer"
#[derive(Debug, Serialize)]
pub struct SummaryEntryResponse {
    pub category: &'static str,
    pub question_text: String,
    pub answer: String,
}

impl From<SummaryEntry> for SummaryEntryResponse {
    fn from(entry: SummaryEntry) -> Self {
        Self {
            category: entry.category.name(),
            question_text: entry.question_text,
            answer: entry.answer.unwrap_or_else(|| "No answer".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub subject: SubjectResponse,
    pub entries: Vec<SummaryEntryResponse>,
}

impl From<AssessmentSummary> for SummaryResponse {
    fn from(summary: AssessmentSummary) -> Self {
        Self {
            subject: summary.subject.into(),
            entries: summary.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where a navigation call landed
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProgressResponse {
    Page(SessionPageResponse),
    Summary(SummaryResponse),
    Exited,
}

impl From<SessionProgress> for ProgressResponse {
    fn from(progress: SessionProgress) -> Self {
        match progress {
            SessionProgress::Page(page) => ProgressResponse::Page(page.into()),
            SessionProgress::Summary(summary) => ProgressResponse::Summary(summary.into()),
            SessionProgress::Exited => ProgressResponse::Exited,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn start_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionPageResponse>), (StatusCode, String)> {
    let gender: Gender = request.gender.parse().map_err(bad_request)?;
    let age_band: AgeBand = request.age_band.parse().map_err(bad_request)?;
    let categories = request
        .challenges
        .iter()
        .map(|c| c.parse::<ChallengeCategory>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(bad_request)?;

    let subject = Subject::new(request.name, gender, age_band).map_err(domain_error)?;

    let page = state
        .session_service
        .start(subject, categories)
        .await
        .map_err(session_error)?;

    Ok((StatusCode::CREATED, Json(page.into())))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let progress = state
        .session_service
        .current(id)
        .await
        .map_err(session_error)?;
    Ok(Json(progress.into()))
}

pub async fn record_answer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<RecordAnswerRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    state
        .session_service
        .record_answer(id, &request.question_id, &request.value)
        .await
        .map_err(session_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn advance_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let progress = state
        .session_service
        .advance(id)
        .await
        .map_err(session_error)?;
    Ok(Json(progress.into()))
}

pub async fn retreat_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let progress = state
        .session_service
        .retreat(id)
        .await
        .map_err(session_error)?;
    Ok(Json(progress.into()))
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let summary = state
        .session_service
        .summary(id)
        .await
        .map_err(session_error)?;
    Ok(Json(summary.into()))
}

pub async fn abandon_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    state
        .session_service
        .abandon(id)
        .await
        .map_err(session_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Error mapping
// ============================================================================

fn parse_session_id(raw: &str) -> Result<SessionId, (StatusCode, String)> {
    Uuid::parse_str(raw)
        .map(SessionId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID".to_string()))
}

fn bad_request(err: DomainError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}

pub(super) fn domain_error(err: DomainError) -> (StatusCode, String) {
    let status = if err.is_configuration() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, err.to_string())
}

fn session_error(err: SessionError) -> (StatusCode, String) {
    match err {
        SessionError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        SessionError::NotComplete => (StatusCode::CONFLICT, err.to_string()),
        SessionError::Domain(domain) => domain_error(domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::QuestionType;

    #[test]
    fn unanswered_entries_render_as_no_answer() {
        let entry = SummaryEntry {
            category: ChallengeCategory::MotorSkills,
            question_text: "How steady is the child's walking?".to_string(),
            answer: None,
        };
        let response: SummaryEntryResponse = entry.into();
        assert_eq!(response.answer, "No answer");
        assert_eq!(response.category, "Motor Skills");
    }

    #[test]
    fn non_radio_questions_serialize_without_options() {
        let q = Question::new("q1", "Responds to name?", QuestionType::Boolean);
        let json = serde_json::to_value(QuestionResponse::from(q)).unwrap();
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], "boolean");
    }
}
