//! Template store factory - picks the repository backend from configuration

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::application::ports::outbound::TemplateRepositoryPort;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{
    InMemoryTemplateRepository, RemoteTemplateRepository, SqliteTemplateRepository,
};

/// Build the template repository named by `TEMPLATE_BACKEND`
pub async fn create_template_repository(
    config: &AppConfig,
) -> Result<Arc<dyn TemplateRepositoryPort>> {
    match config.template_backend.as_str() {
        "memory" => Ok(Arc::new(InMemoryTemplateRepository::new())),
        "sqlite" => {
            let options = SqliteConnectOptions::from_str(&config.database_url)
                .context("Invalid DATABASE_URL")?
                .create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .connect_with(options)
                .await
                .context("Failed to open the template database")?;
            let repository = SqliteTemplateRepository::new(pool)
                .await
                .context("Failed to initialize the template schema")?;
            Ok(Arc::new(repository))
        }
        "remote" => {
            let base_url = config
                .template_api_base_url
                .as_deref()
                .context("TEMPLATE_API_BASE_URL is required for the remote backend")?;
            Ok(Arc::new(RemoteTemplateRepository::new(base_url)))
        }
        other => bail!("unknown TEMPLATE_BACKEND: {other}"),
    }
}
