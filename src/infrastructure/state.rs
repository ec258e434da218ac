//! Shared application state

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::services::{SessionServiceImpl, TemplateServiceImpl};
use crate::domain::services::SchemaStore;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::create_template_repository;
use crate::infrastructure::schema::load_bundled_schemas;
use crate::infrastructure::session::SessionManager;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Questionnaire sets loaded once at startup
    pub schema: Arc<SchemaStore>,
    /// Active assessment sessions
    pub sessions: Arc<RwLock<SessionManager>>,
    // Application services
    pub session_service: SessionServiceImpl,
    pub template_service: TemplateServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Load the bundled questionnaires; a malformed file aborts startup
        let schema = Arc::new(load_bundled_schemas()?);

        // Initialize the template repository for the configured backend
        let repository = create_template_repository(&config).await?;

        let sessions = Arc::new(RwLock::new(SessionManager::new()));

        // Initialize application services
        let session_service = SessionServiceImpl::new(sessions.clone(), schema.clone());
        let template_service = TemplateServiceImpl::new(repository);

        Ok(Self {
            config,
            schema,
            sessions,
            session_service,
            template_service,
        })
    }
}
