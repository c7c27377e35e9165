//! Briefing command

use anyhow::Result;
use colored::*;
use lander_client::decode_result;
use lander_core::dto::briefing::DraftBriefingRequest;
use lander_core::operation::DraftBriefing;

use super::wait_or_interrupt;
use crate::config::Config;
use crate::output::{print_briefing, print_submitted, report_failure};

pub async fn draft(
    config: &Config,
    page_url: String,
    goal: String,
    audience: Option<String>,
    no_wait: bool,
) -> Result<()> {
    let runner = config.runner();
    let request = DraftBriefingRequest {
        page_url,
        goal,
        audience,
    };

    if no_wait {
        let job_id = runner
            .submit::<DraftBriefing>(&request)
            .await
            .map_err(report_failure)?;
        print_submitted(&job_id);
        return Ok(());
    }

    let handle = runner
        .start::<DraftBriefing>(&request)
        .await
        .map_err(report_failure)?;
    let job_id = handle.job_id().clone();
    print_submitted(&job_id);
    println!("{}", "Drafting briefing...".dimmed());

    let draft = wait_or_interrupt(handle)
        .await
        .and_then(|value| decode_result::<DraftBriefing>(&job_id, value))
        .map_err(report_failure)?;

    print_briefing(&draft);
    Ok(())
}
