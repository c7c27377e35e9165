//! Job store contract
//!
//! The poller and runner only ever see a job store through this trait. The
//! HTTP client implements it against a real server; the simulated backend
//! implements it in-process.

use async_trait::async_trait;
use lander_core::domain::job::{Job, JobId};

use crate::LanderClient;
use crate::error::Result;

#[async_trait]
pub trait JobBackend: Send + Sync {
    /// Starts an operation and returns its job id without waiting for it
    ///
    /// # Arguments
    /// * `path` - Operation endpoint the request targets
    /// * `body` - Serialized operation request
    async fn submit(&self, path: &str, body: serde_json::Value) -> Result<JobId>;

    /// Reads the job's current status envelope
    async fn job_status(&self, job_id: &JobId) -> Result<Job>;
}

#[async_trait]
impl JobBackend for LanderClient {
    async fn submit(&self, path: &str, body: serde_json::Value) -> Result<JobId> {
        self.submit_job(path, &body).await
    }

    async fn job_status(&self, job_id: &JobId) -> Result<Job> {
        self.get_job(job_id).await
    }
}
