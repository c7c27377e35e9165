//! Server configuration

use lander_sim::SimulationConfig;

/// Mock server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// Settings injected into the simulated backend
    pub simulation: SimulationConfig,
}

impl ServerConfig {
    /// Creates configuration from environment variables
    ///
    /// - LANDER_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - LANDER_SIM_* (see `SimulationConfig::from_env`)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("LANDER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            bind_addr,
            simulation: SimulationConfig::from_env()?,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        self.simulation.validate()
    }
}
