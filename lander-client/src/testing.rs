//! Scripted in-memory job store for unit tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lander_core::domain::job::{Job, JobId, JobStatus};
use serde_json::Value;

use crate::backend::JobBackend;
use crate::error::{ClientError, Result};

/// Reply to one status query
#[derive(Debug, Clone)]
pub enum Reply {
    Running,
    Done(Value),
    /// `done` envelope with no result payload
    DoneEmpty,
    Failed(Option<String>),
    Error(u16),
}

/// Answers the n-th status query with the n-th reply, repeating the last one
pub struct ScriptedBackend {
    script: Vec<Reply>,
    delay: Duration,
    queries: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    submissions: Mutex<Vec<(String, Value)>>,
}

impl ScriptedBackend {
    pub fn new(script: Vec<Reply>) -> Self {
        assert!(!script.is_empty(), "script needs at least one reply");
        Self {
            script,
            delay: Duration::ZERO,
            queries: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Makes every status query take `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<(String, Value)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobBackend for ScriptedBackend {
    async fn submit(&self, path: &str, body: Value) -> Result<JobId> {
        if path.contains("reject") {
            return Err(ClientError::api_error(400, "rejected by script"));
        }
        self.submissions
            .lock()
            .unwrap()
            .push((path.to_string(), body));
        Ok(JobId::new("j1"))
    }

    async fn job_status(&self, job_id: &JobId) -> Result<Job> {
        let index = self.queries.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let reply = &self.script[index.min(self.script.len() - 1)];
        let mut job = Job::running(job_id.clone(), "scripted");
        match reply {
            Reply::Running => {}
            Reply::Done(result) => job.complete(result.clone()).unwrap(),
            Reply::DoneEmpty => {
                job.status = JobStatus::Done;
                job.completed_at = Some(job.created_at);
            }
            Reply::Failed(Some(message)) => job.fail(message.clone()).unwrap(),
            Reply::Failed(None) => {
                job.status = JobStatus::Failed;
                job.completed_at = Some(job.created_at);
            }
            Reply::Error(status) => {
                return Err(ClientError::api_error(*status, "scripted failure"));
            }
        }
        Ok(job)
    }
}
