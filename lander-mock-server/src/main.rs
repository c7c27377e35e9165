//! Lander Mock Server
//!
//! Runs the simulated job backend behind the job HTTP API.

use std::sync::Arc;

use anyhow::{Context, Result};
use lander_mock_server::api;
use lander_mock_server::config::ServerConfig;
use lander_sim::SimulatedBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lander_mock_server=debug,lander_sim=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lander mock server...");

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    config.validate()?;

    let backend = Arc::new(SimulatedBackend::new(config.simulation.clone()));

    // Build router with all API endpoints
    let app = api::create_router(backend);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
