//! Schema lookup API routes
//!
//! Read-only access to the bundled questionnaires: the known challenge
//! categories, age bands, and the question set for a (category, band) pair.
//! A pair with no authored questions returns an empty list, not an error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::value_objects::{AgeBand, ChallengeCategory};
use crate::infrastructure::state::AppState;

use super::assessment_routes::QuestionResponse;

pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(ChallengeCategory::ALL.iter().map(|c| c.name()).collect())
}

pub async fn list_age_bands() -> Json<Vec<&'static str>> {
    Json(AgeBand::ALL.iter().map(|b| b.label()).collect())
}

pub async fn get_questions(
    State(state): State<Arc<AppState>>,
    Path((category, age_band)): Path<(String, String)>,
) -> Result<Json<Vec<QuestionResponse>>, (StatusCode, String)> {
    let category: ChallengeCategory = category
        .parse()
        .map_err(|err: crate::domain::error::DomainError| {
            (StatusCode::BAD_REQUEST, err.to_string())
        })?;
    let age_band: AgeBand = age_band
        .parse()
        .map_err(|err: crate::domain::error::DomainError| {
            (StatusCode::BAD_REQUEST, err.to_string())
        })?;

    let questions = state
        .schema
        .questions_for(category, age_band)
        .iter()
        .cloned()
        .map(Into::into)
        .collect();
    Ok(Json(questions))
}
