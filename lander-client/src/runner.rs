//! Typed operation runner
//!
//! Glues the submission adapter and the poller together for a concrete
//! `Operation`: the request is serialized on the way in and the `done`
//! payload is decoded into the operation's output type on the way out.

use std::sync::Arc;

use lander_core::domain::job::JobId;
use lander_core::operation::Operation;
use serde_json::Value;
use tracing::info;

use crate::backend::JobBackend;
use crate::config::PollConfig;
use crate::error::{ClientError, JobError};
use crate::poller::{JobPoller, PollHandle};

/// Submits operations and waits for their typed results
#[derive(Clone)]
pub struct JobRunner {
    backend: Arc<dyn JobBackend>,
    poller: JobPoller,
}

impl JobRunner {
    pub fn new(backend: Arc<dyn JobBackend>, config: PollConfig) -> Self {
        let poller = JobPoller::new(Arc::clone(&backend), config);
        Self { backend, poller }
    }

    pub fn poller(&self) -> &JobPoller {
        &self.poller
    }

    /// Starts `O` and returns its job id without waiting for completion
    ///
    /// A rejected submission surfaces immediately as `JobError::Submission`.
    pub async fn submit<O: Operation>(&self, request: &O::Request) -> Result<JobId, JobError> {
        let body = serde_json::to_value(request)
            .map_err(|e| JobError::Submission(ClientError::InvalidRequest(e.to_string())))?;

        let job_id = self
            .backend
            .submit(O::PATH, body)
            .await
            .map_err(JobError::Submission)?;

        info!("Submitted {} job {}", O::JOB_TYPE, job_id);
        Ok(job_id)
    }

    /// Polls an already submitted `O` job to its typed result
    pub async fn wait<O: Operation>(&self, job_id: &JobId) -> Result<O::Output, JobError> {
        let value = self.poller.wait(job_id).await?;
        decode_result::<O>(job_id, value)
    }

    /// Submits `O` and waits for its typed result
    pub async fn run<O: Operation>(&self, request: &O::Request) -> Result<O::Output, JobError> {
        let job_id = self.submit::<O>(request).await?;
        self.wait::<O>(&job_id).await
    }

    /// Submits `O` and polls it on a dedicated, cancellable task
    ///
    /// Decode the handle's outcome with [`decode_result`].
    pub async fn start<O: Operation>(&self, request: &O::Request) -> Result<PollHandle, JobError> {
        let job_id = self.submit::<O>(request).await?;
        Ok(self.poller.spawn(job_id))
    }
}

/// Decodes a `done` payload into `O`'s output type
pub fn decode_result<O: Operation>(job_id: &JobId, value: Value) -> Result<O::Output, JobError> {
    serde_json::from_value(value).map_err(|source| JobError::InvalidResult {
        job_id: job_id.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Reply, ScriptedBackend};
    use lander_core::dto::variants::{GenerateVariantsRequest, Tone};
    use lander_core::operation::GenerateVariants;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    fn request() -> GenerateVariantsRequest {
        GenerateVariantsRequest {
            original_text: "Ship faster with less code".to_string(),
            count: 1,
            tone: Tone::Playful,
            context: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_decodes_typed_result() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Reply::Running,
            Reply::Done(json!({
                "variants": [
                    { "text": "Ship more, type less", "tone": "playful", "rationale": "shorter" }
                ]
            })),
        ]));
        let runner = JobRunner::new(backend.clone(), PollConfig::default());

        let output = runner.run::<GenerateVariants>(&request()).await.unwrap();

        assert_eq!(output.variants.len(), 1);
        assert_eq!(output.variants[0].text, "Ship more, type less");
        assert_eq!(output.variants[0].tone, Tone::Playful);

        let submissions = backend.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0, "/api/variants/generate");
        assert_eq!(submissions[0].1["originalText"], "Ship faster with less code");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatched_result_is_invalid_result() {
        let backend = Arc::new(ScriptedBackend::new(vec![Reply::Done(json!({ "items": [1] }))]));
        let runner = JobRunner::new(backend, PollConfig::default());

        let err = runner.run::<GenerateVariants>(&request()).await.unwrap_err();
        assert!(matches!(err, JobError::InvalidResult { .. }));
    }

    #[derive(Debug, Clone, Copy)]
    struct Rejected;

    #[derive(Debug, Serialize, Deserialize)]
    struct Empty {}

    impl Operation for Rejected {
        type Request = Empty;
        type Output = Empty;

        const PATH: &'static str = "/api/reject";
        const JOB_TYPE: &'static str = "rejected";
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_rejection_is_not_polled() {
        let backend = Arc::new(ScriptedBackend::new(vec![Reply::Running]));
        let runner = JobRunner::new(backend.clone(), PollConfig::default());

        let err = runner.run::<Rejected>(&Empty {}).await.unwrap_err();

        match err {
            JobError::Submission(source) => assert!(source.is_client_error()),
            other => panic!("expected submission error, got {:?}", other),
        }
        assert_eq!(backend.queries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_returns_cancellable_handle() {
        let backend = Arc::new(ScriptedBackend::new(vec![Reply::Running]));
        let runner = JobRunner::new(backend.clone(), PollConfig::default());

        let handle = runner.start::<GenerateVariants>(&request()).await.unwrap();
        assert_eq!(handle.job_id(), &JobId::new("j1"));

        handle.cancel();
        let err = handle.join().await.unwrap_err();
        assert!(matches!(err, JobError::Cancelled { .. }));
    }
}
