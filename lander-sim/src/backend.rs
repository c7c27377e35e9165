//! Simulated job store
//!
//! In-process stand-in for the job server, used offline and in demos.
//! Work runs at submission time, so the job is already terminal when the
//! first status query arrives. Callers still go through the same
//! submit-then-poll contract as against the real server.
//!
//! Finished jobs are kept for `job_ttl`, then dropped: expired entries are
//! swept on every submission and on lookup.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lander_client::{ClientError, JobBackend, Result};
use lander_core::domain::job::{Job, JobId};
use lander_core::operation::{DraftBriefing, GenerateVariants, Operation};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::generator::SimulatedOperation;
use crate::random::{derive_seed, seed_from_bytes, seeded_range, seeded_unit};

/// Message of jobs failed by error simulation
pub const SIMULATED_FAILURE_MESSAGE: &str = "Simulated generation failure: model quota exceeded";

struct StoredJob {
    job: Job,
    expires_at: Instant,
}

/// In-memory job store executing operations synchronously
pub struct SimulatedBackend {
    config: SimulationConfig,
    jobs: Mutex<HashMap<JobId, StoredJob>>,
    /// Counts random draws so seeded runs replay the same latency and failures
    draws: AtomicU64,
}

impl SimulatedBackend {
    /// Creates an empty store
    pub fn new(config: SimulationConfig) -> Self {
        info!(
            "Simulated backend ready (latency: {}, errors: {}, seed: {:?}, job ttl: {:?})",
            config.enable_latency, config.enable_errors, config.fixed_seed, config.job_ttl
        );
        Self {
            config,
            jobs: Mutex::new(HashMap::new()),
            draws: AtomicU64::new(0),
        }
    }

    /// Number of jobs currently stored, including expired ones not yet swept
    pub fn job_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    fn purge_expired(jobs: &mut HashMap<JobId, StoredJob>, now: Instant) {
        let before = jobs.len();
        jobs.retain(|_, stored| stored.expires_at > now);
        let removed = before - jobs.len();
        if removed > 0 {
            debug!("Dropped {} expired job(s)", removed);
        }
    }

    /// Seed for the next latency or failure draw
    fn next_draw(&self) -> u64 {
        match self.config.fixed_seed {
            Some(seed) => derive_seed(seed, self.draws.fetch_add(1, Ordering::SeqCst)),
            None => rand::random(),
        }
    }

    /// Seed for generating the output of one request
    fn request_seed(&self, path: &str, body: &Value) -> u64 {
        match self.config.fixed_seed {
            Some(seed) => {
                let mut bytes = path.as_bytes().to_vec();
                bytes.extend_from_slice(body.to_string().as_bytes());
                derive_seed(seed, seed_from_bytes(&bytes))
            }
            None => rand::random(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.enable_latency {
            return;
        }
        let ms = seeded_range(
            self.next_draw(),
            self.config.min_latency_ms,
            self.config.max_latency_ms,
        );
        debug!("Simulating {} ms of latency", ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn should_fail(&self) -> bool {
        self.config.enable_errors && seeded_unit(self.next_draw()) < self.config.error_rate
    }

    /// Decodes, validates and runs `O`, storing the finished job
    fn execute<O: SimulatedOperation>(&self, path: &str, body: Value) -> Result<JobId> {
        let seed = self.request_seed(path, &body);

        let request: O::Request = serde_json::from_value(body)
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid request body: {}", e)))?;
        O::validate(&request).map_err(ClientError::InvalidRequest)?;

        let mut job = Job::running(JobId::generate(), O::JOB_TYPE);

        let transition = if self.should_fail() {
            job.fail(SIMULATED_FAILURE_MESSAGE)
        } else {
            match serde_json::to_value(O::simulate(&request, seed)) {
                Ok(result) => job.complete(result),
                Err(e) => job.fail(format!("Failed to encode result: {}", e)),
            }
        };
        transition.map_err(|e| ClientError::api_error(500, e.to_string()))?;

        info!("Simulated {} job {} finished as {}", O::JOB_TYPE, job.id, job.status);

        let job_id = job.id.clone();
        let now = Instant::now();
        let mut jobs = self.jobs.lock().unwrap();
        Self::purge_expired(&mut jobs, now);
        jobs.insert(
            job_id.clone(),
            StoredJob {
                job,
                expires_at: now + self.config.job_ttl,
            },
        );
        Ok(job_id)
    }
}

#[async_trait]
impl JobBackend for SimulatedBackend {
    async fn submit(&self, path: &str, body: Value) -> Result<JobId> {
        self.simulate_latency().await;

        if path == GenerateVariants::PATH {
            self.execute::<GenerateVariants>(path, body)
        } else if path == DraftBriefing::PATH {
            self.execute::<DraftBriefing>(path, body)
        } else {
            Err(ClientError::NotFound(format!("Unknown operation path: {}", path)))
        }
    }

    async fn job_status(&self, job_id: &JobId) -> Result<Job> {
        self.simulate_latency().await;

        let mut jobs = self.jobs.lock().unwrap();
        let live = jobs
            .get(job_id)
            .filter(|stored| stored.expires_at > Instant::now())
            .map(|stored| stored.job.clone());

        if live.is_none() && jobs.remove(job_id).is_some() {
            debug!("Job {} expired", job_id);
        }

        live.ok_or_else(|| ClientError::NotFound(format!("Job {} not found", job_id)))
    }
}
