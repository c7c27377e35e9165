//! Error types for the Lander client
//!
//! `ClientError` describes a single failed HTTP exchange. `JobError` is the
//! outcome taxonomy of a submit-and-poll sequence, so callers can tell
//! "the operation failed" apart from "we gave up waiting" and from
//! infrastructure trouble.

use std::time::Duration;

use lander_core::domain::job::JobId;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to a job store
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
            || matches!(self, Self::NotFound(_) | Self::InvalidRequest(_))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Terminal failure of a submit-and-poll sequence
#[derive(Debug, Error)]
pub enum JobError {
    /// The request to start the job was rejected; never retried
    #[error("Job submission rejected: {0}")]
    Submission(#[source] ClientError),

    /// The job reached `failed`
    #[error("Job {job_id} failed: {message}")]
    OperationFailed { job_id: JobId, message: String },

    /// The polling budget ran out before the job reached a terminal status
    #[error("Gave up waiting for job {job_id} after {elapsed:?}")]
    TimedOut { job_id: JobId, elapsed: Duration },

    /// A status query failed at the transport or HTTP layer
    #[error("Status query for job {job_id} failed: {source}")]
    Query {
        job_id: JobId,
        #[source]
        source: ClientError,
    },

    /// The caller cancelled the polling session
    #[error("Polling for job {job_id} was cancelled")]
    Cancelled { job_id: JobId },

    /// The job reported `done` without a result payload
    #[error("Job {job_id} finished without a result")]
    MissingResult { job_id: JobId },

    /// The job finished but its result does not match the operation's output type
    #[error("Job {job_id} returned an unexpected result: {source}")]
    InvalidResult {
        job_id: JobId,
        #[source]
        source: serde_json::Error,
    },
}

impl JobError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    pub fn is_operation_failure(&self) -> bool {
        matches!(self, Self::OperationFailed { .. })
    }

    /// Errors caused by the network or the job store rather than the job itself
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Query { .. } | Self::MissingResult { .. } | Self::InvalidResult { .. }
        )
    }

    /// Job the error refers to, when one had been assigned
    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            Self::Submission(_) => None,
            Self::OperationFailed { job_id, .. }
            | Self::TimedOut { job_id, .. }
            | Self::Query { job_id, .. }
            | Self::Cancelled { job_id }
            | Self::MissingResult { job_id }
            | Self::InvalidResult { job_id, .. } => Some(job_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(ClientError::api_error(404, "missing").is_not_found());
        assert!(ClientError::NotFound("job j1".to_string()).is_not_found());
        assert!(!ClientError::api_error(500, "boom").is_not_found());
    }

    #[test]
    fn test_status_classes() {
        assert!(ClientError::api_error(422, "bad").is_client_error());
        assert!(ClientError::api_error(503, "down").is_server_error());
        assert!(!ClientError::api_error(503, "down").is_client_error());
    }

    #[test]
    fn test_job_error_kinds_are_distinct() {
        let timeout = JobError::TimedOut {
            job_id: JobId::new("j1"),
            elapsed: Duration::from_secs(720),
        };
        let failed = JobError::OperationFailed {
            job_id: JobId::new("j1"),
            message: "quota exceeded".to_string(),
        };

        assert!(timeout.is_timeout());
        assert!(!timeout.is_operation_failure());
        assert!(failed.is_operation_failure());
        assert!(!failed.is_timeout());
        assert_eq!(failed.to_string(), "Job j1 failed: quota exceeded");
    }

    #[test]
    fn test_submission_error_has_no_job_id() {
        let err = JobError::Submission(ClientError::api_error(401, "unauthorized"));
        assert!(err.job_id().is_none());
        assert!(!err.is_infrastructure());
    }
}
