//! Lander CLI
//!
//! Command-line interface for running copy-generation jobs against a job
//! server or the in-process simulated backend.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use lander_client::PollConfig;
use lander_sim::SimulationConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lander")]
#[command(about = "Landing-page copy optimization CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "LANDER_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Use the in-process simulated backend instead of the API
    #[arg(long)]
    offline: bool,

    /// Fixed seed for reproducible simulated output (offline only)
    #[arg(long, env = "LANDER_SEED")]
    seed: Option<u64>,

    /// Simulate network latency (offline only)
    #[arg(long)]
    latency: bool,

    /// Delay between status queries, in milliseconds [env: LANDER_POLL_INTERVAL_MS, default: 5000]
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Maximum time to wait for a job, in milliseconds [env: LANDER_POLL_TIMEOUT_MS, default: 720000]
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Consecutive failed status queries tolerated before giving up [env: LANDER_POLL_MAX_QUERY_FAILURES, default: 0]
    #[arg(long)]
    max_query_failures: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let poll = config::poll_config(
        PollConfig::from_env()?,
        cli.poll_interval_ms,
        cli.timeout_ms,
        cli.max_query_failures,
    );
    poll.validate()?;

    let mut simulation = SimulationConfig::from_env()?;
    if let Some(seed) = cli.seed {
        simulation = simulation.with_seed(seed);
    }
    if cli.latency {
        simulation.enable_latency = true;
    }
    simulation.validate()?;

    let config = Config {
        api_url: cli.api_url,
        offline: cli.offline,
        poll,
        simulation,
    };

    handle_command(cli.command, &config).await
}
