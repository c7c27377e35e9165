//! Job-related API endpoints

use crate::LanderClient;
use crate::error::Result;
use lander_core::domain::job::{Job, JobId};
use lander_core::dto::job::SubmitJobResponse;
use serde::Serialize;

impl LanderClient {
    // =============================================================================
    // Job Submission
    // =============================================================================

    /// Start a long-running operation
    ///
    /// A single request/response: the server accepts the work, starts it
    /// out-of-band and answers with the job id. Rejections are returned
    /// as-is and never retried here.
    ///
    /// # Arguments
    /// * `path` - Operation endpoint, e.g. `/api/variants/generate`
    /// * `body` - Operation-specific request payload
    pub async fn submit_job<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<JobId> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let submitted: SubmitJobResponse = self.handle_response(response).await?;
        tracing::debug!("Submitted job {} via {}", submitted.job_id, path);

        Ok(submitted.job_id)
    }

    // =============================================================================
    // Job Status
    // =============================================================================

    /// Get the current status envelope of a job
    ///
    /// # Arguments
    /// * `job_id` - The job identifier returned at submission
    pub async fn get_job(&self, job_id: &JobId) -> Result<Job> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
