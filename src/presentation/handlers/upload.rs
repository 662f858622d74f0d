use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::DispatchError;
use crate::domain::{FileUpload, JobKey, JobStatus};
use crate::presentation::state::AppState;

use super::error_response::ErrorResponse;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file-upload";

pub const TRANSCRIPTIONS_PATH: &str = "/api/v1/transcriptions";

#[derive(Serialize)]
pub struct SubmitResponse {
    pub key: String,
    pub status: String,
    pub poll_url: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not multipart");
            return ErrorResponse::with_status(rejection.status(), rejection.body_text());
        }
    };
    let mut upload = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return ErrorResponse::with_status(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                );
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read file bytes");
                return ErrorResponse::with_status(
                    e.status(),
                    format!("Failed to read file: {}", e.body_text()),
                );
            }
        };

        tracing::debug!(filename = %filename, bytes = data.len(), "File data received");
        upload = Some(FileUpload::new(filename, data));
        break;
    }

    match state.dispatcher.submit(upload) {
        Ok(key) => (
            StatusCode::ACCEPTED,
            Json(SubmitResponse {
                poll_url: poll_url(&key),
                key: key.to_string(),
                status: JobStatus::Pending.as_str().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            match &e {
                DispatchError::MissingFile => {
                    tracing::warn!("Upload request without a file");
                }
                other => tracing::error!(error = %other, "Failed to submit transcription job"),
            }
            e.into_response()
        }
    }
}

/// Keys keep the caller's extension verbatim, so the key is encoded as one path segment.
pub fn poll_url(key: &JobKey) -> String {
    format!(
        "{}/{}",
        TRANSCRIPTIONS_PATH,
        urlencoding::encode(key.as_str())
    )
}
