//! Variant generation command

use anyhow::Result;
use colored::*;
use lander_client::decode_result;
use lander_core::dto::variants::{GenerateVariantsRequest, Tone};
use lander_core::operation::GenerateVariants;

use super::wait_or_interrupt;
use crate::config::Config;
use crate::output::{print_submitted, print_variants, report_failure};

/// Submit a variants job and, unless `no_wait`, print its result
pub async fn generate(
    config: &Config,
    text: String,
    count: u32,
    tone: Tone,
    context: Option<String>,
    no_wait: bool,
) -> Result<()> {
    let runner = config.runner();
    let request = GenerateVariantsRequest {
        original_text: text,
        count,
        tone,
        context,
    };

    if no_wait {
        let job_id = runner
            .submit::<GenerateVariants>(&request)
            .await
            .map_err(report_failure)?;
        print_submitted(&job_id);
        return Ok(());
    }

    let handle = runner
        .start::<GenerateVariants>(&request)
        .await
        .map_err(report_failure)?;
    let job_id = handle.job_id().clone();
    print_submitted(&job_id);
    println!("{}", "Waiting for variants...".dimmed());

    let output = wait_or_interrupt(handle)
        .await
        .and_then(|value| decode_result::<GenerateVariants>(&job_id, value))
        .map_err(report_failure)?;

    print_variants(&output);
    Ok(())
}
