//! Simulation configuration
//!
//! Injected into the simulated backend at construction. Nothing in the
//! simulator reads ambient settings after that.

use std::time::Duration;

/// Retention of finished jobs (1 hour)
pub const DEFAULT_JOB_TTL: Duration = Duration::from_secs(3_600);

/// Latency, failure and seeding knobs of the simulated backend
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Delay every call by a random duration in `[min_latency_ms, max_latency_ms]`
    pub enable_latency: bool,

    pub min_latency_ms: u64,

    pub max_latency_ms: u64,

    /// Let jobs end `failed` with probability `error_rate`
    pub enable_errors: bool,

    /// Failure probability in `[0, 1]`
    pub error_rate: f64,

    /// Makes every random choice reproducible when set
    pub fixed_seed: Option<u64>,

    /// How long a finished job stays queryable before the store drops it
    pub job_ttl: Duration,
}

impl SimulationConfig {
    /// Configuration with latency and errors turned off
    pub fn new() -> Self {
        Self {
            enable_latency: false,
            min_latency_ms: 200,
            max_latency_ms: 1200,
            enable_errors: false,
            error_rate: 0.1,
            fixed_seed: None,
            job_ttl: DEFAULT_JOB_TTL,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.fixed_seed = Some(seed);
        self
    }

    pub fn with_latency(mut self, min_latency_ms: u64, max_latency_ms: u64) -> Self {
        self.enable_latency = true;
        self.min_latency_ms = min_latency_ms;
        self.max_latency_ms = max_latency_ms;
        self
    }

    pub fn with_job_ttl(mut self, job_ttl: Duration) -> Self {
        self.job_ttl = job_ttl;
        self
    }

    pub fn with_errors(mut self, error_rate: f64) -> Self {
        self.enable_errors = true;
        self.error_rate = error_rate;
        self
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - LANDER_SIM_LATENCY (true/false, default: false)
    /// - LANDER_SIM_MIN_LATENCY_MS (default: 200)
    /// - LANDER_SIM_MAX_LATENCY_MS (default: 1200)
    /// - LANDER_SIM_ERRORS (true/false, default: false)
    /// - LANDER_SIM_ERROR_RATE (default: 0.1)
    /// - LANDER_SIM_SEED (default: unset)
    /// - LANDER_SIM_JOB_TTL_MS (default: 3600000)
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Some(enabled) = env_parse::<bool>("LANDER_SIM_LATENCY")? {
            config.enable_latency = enabled;
        }
        if let Some(ms) = env_parse::<u64>("LANDER_SIM_MIN_LATENCY_MS")? {
            config.min_latency_ms = ms;
        }
        if let Some(ms) = env_parse::<u64>("LANDER_SIM_MAX_LATENCY_MS")? {
            config.max_latency_ms = ms;
        }
        if let Some(enabled) = env_parse::<bool>("LANDER_SIM_ERRORS")? {
            config.enable_errors = enabled;
        }
        if let Some(rate) = env_parse::<f64>("LANDER_SIM_ERROR_RATE")? {
            config.error_rate = rate;
        }
        config.fixed_seed = env_parse::<u64>("LANDER_SIM_SEED")?;
        if let Some(ms) = env_parse::<u64>("LANDER_SIM_JOB_TTL_MS")? {
            config.job_ttl = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_latency_ms > self.max_latency_ms {
            anyhow::bail!(
                "min_latency_ms ({}) cannot exceed max_latency_ms ({})",
                self.min_latency_ms,
                self.max_latency_ms
            );
        }

        if !(0.0..=1.0).contains(&self.error_rate) {
            anyhow::bail!("error_rate must be between 0 and 1 (got {})", self.error_rate);
        }

        if self.job_ttl.is_zero() {
            anyhow::bail!("job_ttl must be greater than 0");
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_parse<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("invalid value for {}: {}", name, e)),
        Err(_) => Ok(None),
    }
}
