//! Black-box tests: the mock server on an ephemeral port, driven through
//! the real HTTP client.

use std::sync::Arc;
use std::time::Duration;

use lander_client::{JobError, JobRunner, LanderClient, PollConfig};
use lander_core::domain::job::{JobId, JobStatus};
use lander_core::dto::variants::{GenerateVariantsRequest, Tone};
use lander_core::operation::{GenerateVariants, Operation};
use lander_mock_server::api::create_router;
use lander_sim::{SimulatedBackend, SimulationConfig};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: SimulationConfig) -> Self {
        let app = create_router(Arc::new(SimulatedBackend::new(config)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn variants_request() -> GenerateVariantsRequest {
    GenerateVariantsRequest {
        original_text: "Hire faster".to_string(),
        count: 2,
        tone: Tone::Professional,
        context: None,
    }
}

fn fast_polling() -> PollConfig {
    PollConfig::new(Duration::from_millis(20), Duration::from_secs(5))
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::spawn(SimulationConfig::new()).await;

    let response = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_submit_then_status_envelope() {
    let server = TestServer::spawn(SimulationConfig::new().with_seed(11)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}{}", server.base_url, GenerateVariants::PATH))
        .json(&variants_request())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body: serde_json::Value = response.json().await.unwrap();
    let job_id = body["jobId"].as_str().unwrap().to_string();

    let job: serde_json::Value = client
        .get(format!("{}/api/jobs/{}", server.base_url, job_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(job["id"], job_id);
    assert_eq!(job["type"], "generate-variants");
    assert_eq!(job["status"], "done");
    assert_eq!(job["result"]["variants"].as_array().unwrap().len(), 2);
    assert!(job["createdAt"].is_string());
    assert!(job["completedAt"].is_string());
    assert!(job.get("error").is_none());
}

#[tokio::test]
async fn test_runner_over_http() {
    let server = TestServer::spawn(SimulationConfig::new()).await;
    let runner = JobRunner::new(Arc::new(LanderClient::new(&server.base_url)), fast_polling());

    let output = runner
        .run::<GenerateVariants>(&variants_request())
        .await
        .unwrap();

    assert_eq!(output.variants.len(), 2);
    assert!(output.variants.iter().all(|v| v.tone == Tone::Professional));
}

#[tokio::test]
async fn test_invalid_request_is_bad_request() {
    let server = TestServer::spawn(SimulationConfig::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", server.base_url, GenerateVariants::PATH))
        .json(&json!({ "originalText": "Hire faster", "count": 50 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("count"));
}

#[tokio::test]
async fn test_submission_rejection_reaches_runner() {
    let server = TestServer::spawn(SimulationConfig::new()).await;
    let runner = JobRunner::new(Arc::new(LanderClient::new(&server.base_url)), fast_polling());

    let mut request = variants_request();
    request.original_text = String::new();
    let err = runner.run::<GenerateVariants>(&request).await.unwrap_err();

    match err {
        JobError::Submission(source) => assert!(source.is_client_error()),
        other => panic!("expected submission error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_job_is_not_found() {
    let server = TestServer::spawn(SimulationConfig::new()).await;
    let client = LanderClient::new(&server.base_url);

    let err = client.get_job(&JobId::new("nope")).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "API error (status 404): Job nope not found");
}

#[tokio::test]
async fn test_failed_job_over_http() {
    let server = TestServer::spawn(SimulationConfig::new().with_errors(1.0)).await;
    let client = LanderClient::new(&server.base_url);

    let job_id = client
        .submit_job(GenerateVariants::PATH, &variants_request())
        .await
        .unwrap();
    let job = client.get_job(&job_id).await.unwrap();

    assert_eq!(job.status, JobStatus::Failed);
    assert!(job.error.is_some());
}
