//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use anyhow::Context;

use blog_api::telemetry::{TelemetryConfig, init_telemetry};
use blog_api::{AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API Server on {}:{}", config.host, config.port);

    let state = AppState::new(config.database.as_ref()).await?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    blog_api::run(listener, state, config.workers)?.await?;

    tracing::info!("Server stopped");
    Ok(())
}
