//! Configuration module
//!
//! Handles CLI configuration and picks the job backend to talk to.

use std::sync::Arc;
use std::time::Duration;

use lander_client::{JobBackend, JobRunner, LanderClient, PollConfig};
use lander_sim::{SimulatedBackend, SimulationConfig};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job API
    pub api_url: String,

    /// Run against the simulated backend
    pub offline: bool,

    /// Polling cadence and budget
    pub poll: PollConfig,

    /// Simulated backend settings, used when offline
    pub simulation: SimulationConfig,
}

impl Config {
    /// Backend selected by `offline`
    pub fn backend(&self) -> Arc<dyn JobBackend> {
        if self.offline {
            Arc::new(SimulatedBackend::new(self.simulation.clone()))
        } else {
            Arc::new(LanderClient::new(self.api_url.clone()))
        }
    }

    pub fn runner(&self) -> JobRunner {
        JobRunner::new(self.backend(), self.poll.clone())
    }
}

/// Applies command-line overrides on top of the environment's poll settings
pub fn poll_config(
    base: PollConfig,
    poll_interval_ms: Option<u64>,
    timeout_ms: Option<u64>,
    max_query_failures: Option<u32>,
) -> PollConfig {
    let mut poll = base;
    if let Some(ms) = poll_interval_ms {
        poll.poll_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = timeout_ms {
        poll.timeout = Duration::from_millis(ms);
    }
    if let Some(failures) = max_query_failures {
        poll.max_consecutive_query_failures = failures;
    }
    poll
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_core::operation::{GenerateVariants, Operation};
    use serde_json::json;

    fn config(offline: bool) -> Config {
        Config {
            // Nothing listens here; only offline runs may touch the backend
            api_url: "http://127.0.0.1:9".to_string(),
            offline,
            poll: PollConfig::default(),
            simulation: SimulationConfig::new().with_seed(1),
        }
    }

    #[test]
    fn test_flags_override_environment_poll_settings() {
        let base = PollConfig::new(Duration::from_secs(2), Duration::from_secs(30))
            .with_max_consecutive_query_failures(1);

        let unchanged = poll_config(base.clone(), None, None, None);
        assert_eq!(unchanged, base);

        let overridden = poll_config(base, Some(250), None, Some(4));
        assert_eq!(overridden.poll_interval, Duration::from_millis(250));
        assert_eq!(overridden.timeout, Duration::from_secs(30));
        assert_eq!(overridden.max_consecutive_query_failures, 4);
    }

    #[tokio::test]
    async fn test_offline_uses_simulated_backend() {
        let backend = config(true).backend();

        let job_id = backend
            .submit(
                GenerateVariants::PATH,
                json!({ "originalText": "Hire faster", "count": 2 }),
            )
            .await
            .unwrap();
        let job = backend.job_status(&job_id).await.unwrap();

        assert!(job.is_terminal());
    }

    #[tokio::test]
    async fn test_online_uses_http_backend() {
        let backend = config(false).backend();

        let err = backend
            .submit(GenerateVariants::PATH, json!({ "originalText": "x" }))
            .await
            .unwrap_err();

        assert!(matches!(err, lander_client::ClientError::RequestFailed(_)));
    }
}
