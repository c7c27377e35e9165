//! API Module
//!
//! HTTP API layer of the mock server.

pub mod error;
pub mod health;
pub mod job;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use lander_client::JobBackend;
use lander_core::operation::{DraftBriefing, GenerateVariants, Operation};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router(backend: Arc<dyn JobBackend>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Operation endpoints
        .route(GenerateVariants::PATH, post(job::submit::<GenerateVariants>))
        .route(DraftBriefing::PATH, post(job::submit::<DraftBriefing>))
        // Job status
        .route("/api/jobs/{id}", get(job::get_job))
        // Add state and middleware
        .with_state(backend)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
