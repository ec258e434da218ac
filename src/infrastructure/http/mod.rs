//! HTTP REST API routes

mod assessment_routes;
mod schema_routes;
mod template_routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use assessment_routes::*;
pub use schema_routes::*;
pub use template_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Schema lookup routes
        .route("/api/schema/categories", get(schema_routes::list_categories))
        .route("/api/schema/age-bands", get(schema_routes::list_age_bands))
        .route(
            "/api/schema/{category}/{age_band}/questions",
            get(schema_routes::get_questions),
        )
        // Assessment session routes
        .route("/api/assessments", post(assessment_routes::start_session))
        .route(
            "/api/assessments/{id}",
            get(assessment_routes::get_session),
        )
        .route(
            "/api/assessments/{id}",
            delete(assessment_routes::abandon_session),
        )
        .route(
            "/api/assessments/{id}/answers",
            put(assessment_routes::record_answer),
        )
        .route(
            "/api/assessments/{id}/advance",
            post(assessment_routes::advance_session),
        )
        .route(
            "/api/assessments/{id}/retreat",
            post(assessment_routes::retreat_session),
        )
        .route(
            "/api/assessments/{id}/summary",
            get(assessment_routes::get_summary),
        )
        // Template question routes
        .route(
            "/api/templates/questions",
            post(template_routes::create_template_question),
        )
        .route(
            "/api/templates/questions",
            get(template_routes::list_template_questions),
        )
        .route(
            "/api/templates/questions/{id}",
            get(template_routes::get_template_question),
        )
        .route(
            "/api/templates/questions/{id}",
            delete(template_routes::delete_template_question),
        )
}
