//! Job DTOs for the submission and status endpoints

use serde::{Deserialize, Serialize};

use crate::domain::job::JobId;

/// Response to `POST <operation-path>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobResponse {
    pub job_id: JobId,
}

/// Body of any non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
