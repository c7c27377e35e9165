//! Job API Handlers
//!
//! Submission endpoints for every operation and the shared status endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use lander_client::JobBackend;
use lander_core::domain::job::{Job, JobId};
use lander_core::dto::job::SubmitJobResponse;
use lander_core::operation::Operation;
use serde_json::Value;

use crate::api::error::ApiResult;

/// POST <operation-path>
/// Start an operation and answer with its job id
pub async fn submit<O: Operation>(
    State(backend): State<Arc<dyn JobBackend>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<SubmitJobResponse>)> {
    tracing::info!("Submitting {} job", O::JOB_TYPE);

    let job_id = backend.submit(O::PATH, body).await?;

    Ok((StatusCode::ACCEPTED, Json(SubmitJobResponse { job_id })))
}

/// GET /api/jobs/{id}
/// Get the job status envelope
pub async fn get_job(
    State(backend): State<Arc<dyn JobBackend>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Job>> {
    tracing::debug!("Getting job: {}", id);

    let job = backend.job_status(&JobId::new(id)).await?;

    Ok(Json(job))
}
