//! Sahaya Engine - Backend API for child-development assessments
//!
//! The engine is the backend server that:
//! - Loads the bundled questionnaire schemas at startup
//! - Walks assessment sessions challenge by challenge and collects answers
//! - Builds the session summary once every challenge has been visited
//! - Persists authored template questions to the configured backend

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sahaya_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sahaya Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Template backend: {}", config.template_backend);

    // Initialize application state
    let port = config.server_port;
    let state = AppState::new(config).await?;
    let state = Arc::new(state);
    tracing::info!(
        "Application state initialized ({} questionnaire sets)",
        state.schema.pair_count()
    );

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        // Merge REST API routes
        .merge(http::create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server until it exits or a shutdown signal arrives
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
