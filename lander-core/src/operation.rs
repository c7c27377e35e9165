//! Typed long-running operations
//!
//! An `Operation` binds a submission endpoint to the request it accepts and
//! the result a finished job carries. The job envelope itself treats the
//! result as opaque JSON; only the operation knows its shape.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dto::briefing::{BriefingDraft, DraftBriefingRequest};
use crate::dto::variants::{GenerateVariantsRequest, GeneratedVariants, MAX_VARIANTS};

pub trait Operation: Send + Sync + 'static {
    /// Request body posted to `PATH`
    type Request: Serialize + DeserializeOwned + Send + Sync;
    /// Payload of a `done` job
    type Output: Serialize + DeserializeOwned + Send;

    /// Submission endpoint, relative to the API base URL
    const PATH: &'static str;
    /// Value of the job envelope's `type` field
    const JOB_TYPE: &'static str;

    /// Structural checks a job store applies before accepting the request
    fn validate(_request: &Self::Request) -> Result<(), String> {
        Ok(())
    }
}

/// AI-assisted text variants for an optimization point
#[derive(Debug, Clone, Copy)]
pub struct GenerateVariants;

impl Operation for GenerateVariants {
    type Request = GenerateVariantsRequest;
    type Output = GeneratedVariants;

    const PATH: &'static str = "/api/variants/generate";
    const JOB_TYPE: &'static str = "generate-variants";

    fn validate(request: &Self::Request) -> Result<(), String> {
        if request.original_text.trim().is_empty() {
            return Err("originalText cannot be empty".to_string());
        }
        if request.count == 0 || request.count > MAX_VARIANTS {
            return Err(format!(
                "count must be between 1 and {} (got {})",
                MAX_VARIANTS, request.count
            ));
        }
        Ok(())
    }
}

/// Draft briefing for a landing page
#[derive(Debug, Clone, Copy)]
pub struct DraftBriefing;

impl Operation for DraftBriefing {
    type Request = DraftBriefingRequest;
    type Output = BriefingDraft;

    const PATH: &'static str = "/api/briefings/draft";
    const JOB_TYPE: &'static str = "draft-briefing";

    fn validate(request: &Self::Request) -> Result<(), String> {
        if request.page_url.trim().is_empty() {
            return Err("pageUrl cannot be empty".to_string());
        }
        if request.goal.trim().is_empty() {
            return Err("goal cannot be empty".to_string());
        }
        Ok(())
    }
}
