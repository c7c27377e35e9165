//! Lander HTTP Client
//!
//! Submits long-running copy-generation operations and polls their jobs to
//! completion.
//!
//! The pieces:
//! - [`LanderClient`]: HTTP adapter for the submission and status endpoints
//! - [`JobBackend`]: the job store contract, implemented by the HTTP client
//!   and by the simulated backend
//! - [`JobPoller`]: fixed-cadence, single-flight status polling with a
//!   whole-session timeout and cancellation
//! - [`JobRunner`]: typed submit / wait / run on top of the two
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lander_client::{JobRunner, LanderClient, PollConfig};
//! use lander_core::dto::variants::{GenerateVariantsRequest, Tone};
//! use lander_core::operation::GenerateVariants;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(LanderClient::new("http://localhost:8080"));
//!     let runner = JobRunner::new(client, PollConfig::default());
//!
//!     let generated = runner
//!         .run::<GenerateVariants>(&GenerateVariantsRequest {
//!             original_text: "Ship faster with less code".to_string(),
//!             count: 3,
//!             tone: Tone::Bold,
//!             context: None,
//!         })
//!         .await?;
//!
//!     for variant in generated.variants {
//!         println!("{}", variant.text);
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
mod config;
pub mod error;
mod jobs;
mod poller;
mod runner;
#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use backend::JobBackend;
pub use config::{DEFAULT_POLL_INTERVAL, DEFAULT_POLL_TIMEOUT, PollConfig};
pub use error::{ClientError, JobError, Result};
pub use poller::{GENERIC_FAILURE_MESSAGE, JobPoller, PollHandle};
pub use runner::{JobRunner, decode_result};

use lander_core::dto::job::ErrorBody;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Lander job API
///
/// Covers the two job endpoints every long-running operation shares:
/// - `POST <operation-path>` submits work and returns a job id
/// - `GET /api/jobs/{id}` reports the job's status envelope
#[derive(Debug, Clone)]
pub struct LanderClient {
    /// Base URL of the API (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl LanderClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use lander_client::LanderClient;
    ///
    /// let client = LanderClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure per-request timeouts, proxies, TLS settings, etc.
    /// Each status query is a short-lived request, so a request timeout well
    /// below the poll interval is a sensible choice.
    ///
    /// # Example
    /// ```
    /// use lander_client::LanderClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(4))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = LanderClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses become `ClientError::ApiError`, using the `error`
    /// field of the body as the message when the body is an `ErrorBody`.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
