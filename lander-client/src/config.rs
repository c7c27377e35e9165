//! Poller configuration
//!
//! Cadence and budget of a polling session. The defaults are part of the
//! job contract; override them only for tests, demos or unusually slow
//! operations.

use std::time::Duration;

/// Delay between the starts of two consecutive status ticks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5_000);

/// Wall-clock budget of a whole polling session (12 minutes)
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(720_000);

/// Polling session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// How often to query the job status
    pub poll_interval: Duration,

    /// Budget for the entire session, measured from its first tick
    pub timeout: Duration,

    /// Status query failures tolerated in a row before the session aborts
    ///
    /// `0` aborts on the first failed query. A tolerated failure is retried
    /// on the next regular tick, never sooner.
    pub max_consecutive_query_failures: u32,
}

impl PollConfig {
    /// Creates a configuration with the given cadence and budget
    pub fn new(poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            poll_interval,
            timeout,
            max_consecutive_query_failures: 0,
        }
    }

    /// Sets how many consecutive failed queries are tolerated
    pub fn with_max_consecutive_query_failures(mut self, failures: u32) -> Self {
        self.max_consecutive_query_failures = failures;
        self
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - LANDER_POLL_INTERVAL_MS (default: 5000)
    /// - LANDER_POLL_TIMEOUT_MS (default: 720000)
    /// - LANDER_POLL_MAX_QUERY_FAILURES (default: 0)
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(ms) = env_u64("LANDER_POLL_INTERVAL_MS")? {
            config.poll_interval = Duration::from_millis(ms);
        }

        if let Some(ms) = env_u64("LANDER_POLL_TIMEOUT_MS")? {
            config.timeout = Duration::from_millis(ms);
        }

        if let Some(failures) = env_u64("LANDER_POLL_MAX_QUERY_FAILURES")? {
            config.max_consecutive_query_failures = u32::try_from(failures).map_err(|_| {
                anyhow::anyhow!("LANDER_POLL_MAX_QUERY_FAILURES is out of range: {}", failures)
            })?;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        if self.poll_interval > self.timeout {
            anyhow::bail!(
                "poll_interval ({:?}) cannot exceed timeout ({:?})",
                self.poll_interval,
                self.timeout
            );
        }

        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_POLL_TIMEOUT)
    }
}

fn env_u64(name: &str) -> anyhow::Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{} must be an unsigned integer: {}", name, e)),
        Err(_) => Ok(None),
    }
}
