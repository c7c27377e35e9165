//! Job command handlers
//!
//! Inspect or wait for jobs submitted earlier, e.g. with `--no-wait`.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use lander_core::domain::job::JobId;

use super::wait_or_interrupt;
use crate::config::Config;
use crate::output::{print_job_details, print_result, report_failure};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Query a job's status once
    Status {
        /// Job ID
        id: String,
    },
    /// Poll a job until it finishes and print its result
    Wait {
        /// Job ID
        id: String,
    },
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    if config.offline {
        eprintln!(
            "{}",
            "⚠ Offline jobs only live for one invocation; this lookup will not find earlier jobs"
                .yellow()
        );
    }

    match command {
        JobCommands::Status { id } => status(config, JobId::new(id)).await,
        JobCommands::Wait { id } => wait(config, JobId::new(id)).await,
    }
}

async fn status(config: &Config, job_id: JobId) -> Result<()> {
    let job = config
        .backend()
        .job_status(&job_id)
        .await
        .with_context(|| format!("Failed to query job {}", job_id))?;

    print_job_details(&job);
    Ok(())
}

async fn wait(config: &Config, job_id: JobId) -> Result<()> {
    let handle = config.runner().poller().spawn(job_id);
    println!("{}", format!("Waiting for job {}...", handle.job_id()).dimmed());

    let value = wait_or_interrupt(handle).await.map_err(report_failure)?;

    print_result(&value)
}
