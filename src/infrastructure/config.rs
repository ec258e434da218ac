//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Template store backend: "memory", "sqlite" or "remote"
    pub template_backend: String,
    /// SQLite connection URL for the sqlite backend
    pub database_url: String,
    /// Base URL of the hosted mock API for the remote backend
    pub template_api_base_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            template_backend: env::var("TEMPLATE_BACKEND")
                .unwrap_or_else(|_| "sqlite".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:templates.db".to_string()),
            template_api_base_url: env::var("TEMPLATE_API_BASE_URL").ok(),
        })
    }
}
