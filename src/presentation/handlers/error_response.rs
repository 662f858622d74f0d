use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::DispatchError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn with_status(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorResponse {
                error: error.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match &self {
            DispatchError::MissingFile => StatusCode::BAD_REQUEST,
            DispatchError::KeyGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::QueueFull | DispatchError::WorkerUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        let message = match &self {
            DispatchError::KeyGeneration(_) => {
                "Internal error: failed to generate a job key".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponse::with_status(status, message)
    }
}
