//! Job poller
//!
//! Turns a job id into the job's eventual result through a bounded sequence
//! of short status queries. No connection is held open between queries.
//!
//! A session moves `Polling -> {resolved, failed, timed out, cancelled,
//! aborted}` and every right-hand state is terminal:
//! - the first query is issued immediately, then one per `poll_interval`
//!   tick, measured from tick start
//! - a tick that fires while a query is still in flight is dropped
//! - the first non-`running` status ends the session
//! - `timeout` bounds the whole session, not a single query
//! - cancellation stops further queries; nothing is sent to the job store

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use lander_core::domain::job::{Job, JobId, JobStatus};
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::backend::JobBackend;
use crate::config::PollConfig;
use crate::error::{JobError, Result};

/// Message used when a job fails without reporting why
pub const GENERIC_FAILURE_MESSAGE: &str = "The operation failed without an error message";

type StatusQuery<'a> = Pin<Box<dyn Future<Output = Result<Job>> + Send + 'a>>;

/// Polls a job store until a job reaches a terminal status
#[derive(Clone)]
pub struct JobPoller {
    backend: Arc<dyn JobBackend>,
    config: PollConfig,
}

impl JobPoller {
    /// Creates a new job poller
    pub fn new(backend: Arc<dyn JobBackend>, config: PollConfig) -> Self {
        Self { backend, config }
    }

    /// Polls `job_id` on the caller's task
    ///
    /// Dropping the returned future abandons the session; no further
    /// queries are issued.
    pub async fn wait(&self, job_id: &JobId) -> std::result::Result<Value, JobError> {
        run_session(
            self.backend.as_ref(),
            job_id,
            &self.config,
            std::future::pending(),
        )
        .await
    }

    /// Polls `job_id` on a dedicated task
    ///
    /// The returned handle cancels the session on `cancel()` or when dropped.
    pub fn spawn(&self, job_id: JobId) -> PollHandle {
        let (cancel, signal) = watch::channel(false);
        let backend = Arc::clone(&self.backend);
        let config = self.config.clone();
        let session_id = job_id.clone();

        let task = tokio::spawn(async move {
            run_session(backend.as_ref(), &session_id, &config, cancellation(signal)).await
        });

        PollHandle {
            job_id,
            cancel,
            task,
        }
    }
}

/// Handle to a polling session running on its own task
pub struct PollHandle {
    job_id: JobId,
    cancel: watch::Sender<bool>,
    task: JoinHandle<std::result::Result<Value, JobError>>,
}

impl PollHandle {
    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Stops the session at its next scheduling point
    ///
    /// The job keeps running server-side.
    pub fn cancel(&self) {
        // Fails only when the session already finished
        let _ = self.cancel.send(true);
    }

    /// Waits for the session outcome
    pub async fn join(self) -> std::result::Result<Value, JobError> {
        let PollHandle {
            job_id,
            cancel,
            task,
        } = self;

        let outcome = task.await;
        drop(cancel);

        match outcome {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Err(JobError::Cancelled { job_id }),
        }
    }
}

/// Resolves once the session is cancelled or its handle is gone
async fn cancellation(mut signal: watch::Receiver<bool>) {
    let _ = signal.wait_for(|cancelled| *cancelled).await;
}

/// Runs one polling session to a terminal outcome
async fn run_session<C>(
    backend: &dyn JobBackend,
    job_id: &JobId,
    config: &PollConfig,
    cancelled: C,
) -> std::result::Result<Value, JobError>
where
    C: Future<Output = ()>,
{
    let started = Instant::now();
    let deadline = time::sleep_until(started + config.timeout);
    tokio::pin!(deadline);
    tokio::pin!(cancelled);

    let period = config.poll_interval.max(Duration::from_millis(1));
    let mut ticker = time::interval_at(started, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut in_flight: Option<StatusQuery<'_>> = None;
    let mut queries: u32 = 0;
    let mut consecutive_failures: u32 = 0;

    debug!(
        "Polling job {} (interval: {:?}, timeout: {:?})",
        job_id, config.poll_interval, config.timeout
    );

    loop {
        tokio::select! {
            biased;

            _ = &mut cancelled => {
                info!("Stopped polling job {} after {} queries (cancelled)", job_id, queries);
                return Err(JobError::Cancelled { job_id: job_id.clone() });
            }

            _ = &mut deadline => {
                let elapsed = started.elapsed();
                warn!("Gave up on job {} after {:?} ({} queries)", job_id, elapsed, queries);
                return Err(JobError::TimedOut { job_id: job_id.clone(), elapsed });
            }

            response = async { in_flight.as_mut().expect("guarded by is_some").await }, if in_flight.is_some() => {
                in_flight = None;

                match response {
                    Ok(job) => {
                        consecutive_failures = 0;
                        if let Some(outcome) = resolve(job_id, job) {
                            debug!("Job {} resolved after {} queries", job_id, queries);
                            return outcome;
                        }
                    }
                    Err(source) => {
                        consecutive_failures += 1;
                        if consecutive_failures > config.max_consecutive_query_failures {
                            warn!("Status query for job {} failed: {}", job_id, source);
                            return Err(JobError::Query { job_id: job_id.clone(), source });
                        }
                        warn!(
                            "Status query for job {} failed ({}/{} tolerated), retrying next tick: {}",
                            job_id, consecutive_failures, config.max_consecutive_query_failures, source
                        );
                    }
                }
            }

            _ = ticker.tick() => {
                if in_flight.is_some() {
                    debug!("Query for job {} still in flight, skipping tick", job_id);
                    continue;
                }
                queries += 1;
                in_flight = Some(backend.job_status(job_id));
            }
        }
    }
}

/// Maps a status envelope to a session outcome; `None` while running
fn resolve(job_id: &JobId, job: Job) -> Option<std::result::Result<Value, JobError>> {
    match job.status {
        JobStatus::Running => None,
        JobStatus::Done => {
            info!("Job {} ({}) done", job_id, job.job_type);
            Some(job.result.ok_or_else(|| JobError::MissingResult {
                job_id: job_id.clone(),
            }))
        }
        JobStatus::Failed => {
            let message = job
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            info!("Job {} ({}) failed: {}", job_id, job.job_type, message);
            Some(Err(JobError::OperationFailed {
                job_id: job_id.clone(),
                message,
            }))
        }
    }
}
