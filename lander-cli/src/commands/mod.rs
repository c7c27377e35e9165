//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod briefing;
mod job;
mod variants;

pub use job::JobCommands;

use anyhow::Result;
use clap::Subcommand;
use lander_client::{JobError, PollHandle};
use lander_core::dto::variants::Tone;
use serde_json::Value;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate alternative versions of a piece of landing-page copy
    Variants {
        /// Copy to rewrite
        #[arg(long)]
        text: String,

        /// Number of variants to generate (1-10)
        #[arg(long, default_value_t = 3)]
        count: u32,

        /// Voice of the variants (neutral, bold, playful, professional, urgent)
        #[arg(long, default_value = "neutral")]
        tone: Tone,

        /// Free-form context about the product or audience
        #[arg(long)]
        context: Option<String>,

        /// Print the job id and exit without waiting
        #[arg(long)]
        no_wait: bool,
    },
    /// Draft a copy briefing for a landing page
    Briefing {
        /// URL of the page to brief
        #[arg(long)]
        page_url: String,

        /// Conversion goal of the page
        #[arg(long)]
        goal: String,

        /// Intended audience, if known
        #[arg(long)]
        audience: Option<String>,

        /// Print the job id and exit without waiting
        #[arg(long)]
        no_wait: bool,
    },
    /// Job inspection
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Variants {
            text,
            count,
            tone,
            context,
            no_wait,
        } => variants::generate(config, text, count, tone, context, no_wait).await,
        Commands::Briefing {
            page_url,
            goal,
            audience,
            no_wait,
        } => briefing::draft(config, page_url, goal, audience, no_wait).await,
        Commands::Job { command } => job::handle_job_command(command, config).await,
    }
}

/// Waits for a polling session, cancelling it on Ctrl-C
///
/// Dropping the handle on interrupt stops the session.
async fn wait_or_interrupt(handle: PollHandle) -> Result<Value, JobError> {
    let job_id = handle.job_id().clone();

    tokio::select! {
        outcome = handle.join() => outcome,
        _ = tokio::signal::ctrl_c() => Err(JobError::Cancelled { job_id }),
    }
}
