//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lander_client::ClientError;
use lander_core::dto::job::ErrorBody;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Error reported by the job backend
    Backend(ClientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Backend(ClientError::ApiError { status, message }) => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    tracing::error!("Backend error: {}", message);
                }
                (status, message)
            }
            ApiError::Backend(err) => {
                tracing::error!("Backend error: {:?}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(msg) => ApiError::NotFound(msg),
            ClientError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            other => ApiError::Backend(other),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
