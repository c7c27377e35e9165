//! Terminal output helpers

use colored::*;
use lander_client::JobError;
use lander_core::domain::job::{Job, JobId, JobStatus};
use lander_core::dto::briefing::BriefingDraft;
use lander_core::dto::variants::GeneratedVariants;
use serde_json::Value;

pub fn print_submitted(job_id: &JobId) {
    println!("{} Submitted job {}", "✓".green(), job_id.to_string().cyan());
}

pub fn print_variants(output: &GeneratedVariants) {
    println!();
    println!("{}", format!("Generated {} variant(s):", output.variants.len()).bold());
    println!();
    for (i, variant) in output.variants.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), variant.text.bold());
        println!("     {}", variant.rationale.dimmed());
    }
}

pub fn print_briefing(draft: &BriefingDraft) {
    println!();
    println!("{}", "Briefing:".bold());
    println!("  {}", draft.summary);
    println!("\n{}", "Target audience:".bold());
    println!("  {}", draft.target_audience);

    println!("\n{}", "Key messages:".bold());
    for message in &draft.key_messages {
        println!("  {} {}", "▸".cyan(), message);
    }

    println!("\n{}", "Suggested goals:".bold());
    for goal in &draft.suggested_goals {
        println!("  {} {}", "▸".cyan(), goal);
    }
}

/// Print detailed job information
pub fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.id.to_string().cyan());
    println!("  Type:      {}", job.job_type);
    println!("  Status:    {}", colorize_status(&job.status));
    println!(
        "  Created:   {}",
        job.created_at.format("%Y-%m-%d %H:%M:%S")
    );

    if let Some(completed) = job.completed_at {
        println!("  Completed: {}", completed.format("%Y-%m-%d %H:%M:%S"));
        let duration = completed.signed_duration_since(job.created_at);
        println!("  Duration:  {}ms", duration.num_milliseconds());
    }

    if let Some(error) = &job.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }

    if let Some(result) = &job.result {
        println!("\n{}", "Result:".bold());
        if let Ok(pretty) = serde_json::to_string_pretty(result) {
            println!("{}", pretty);
        } else {
            println!("{:?}", result);
        }
    }
}

pub fn print_result(value: &Value) -> anyhow::Result<()> {
    println!("\n{}", "Result:".bold());
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a one-line hint for a failed job and hands the error back
pub fn report_failure(err: JobError) -> anyhow::Error {
    let hint = match &err {
        JobError::Submission(_) => "✗ The server rejected the request".red(),
        JobError::OperationFailed { .. } => "✗ The job failed".red(),
        JobError::TimedOut { .. } => {
            "⚠ Gave up waiting; the job may still finish (try `lander job wait`)".yellow()
        }
        JobError::Query { .. } => "✗ Lost contact with the job server".red(),
        JobError::Cancelled { .. } => "⚠ Cancelled".yellow(),
        JobError::MissingResult { .. } => "✗ The job finished without a result".red(),
        JobError::InvalidResult { .. } => "✗ The job returned an unexpected result".red(),
    };
    eprintln!("{}", hint);
    err.into()
}

fn colorize_status(status: &JobStatus) -> ColoredString {
    let status_str = status.to_string();
    match status {
        JobStatus::Running => status_str.cyan(),
        JobStatus::Done => status_str.green(),
        JobStatus::Failed => status_str.red(),
    }
}
