//! Briefing draft DTOs

use serde::{Deserialize, Serialize};

/// Request to draft a briefing for a landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBriefingRequest {
    pub page_url: String,
    /// Conversion goal the page is optimized for
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

/// Result of a `draft-briefing` job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingDraft {
    pub summary: String,
    pub target_audience: String,
    pub key_messages: Vec<String>,
    pub suggested_goals: Vec<String>,
}
