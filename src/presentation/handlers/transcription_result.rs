use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{JobKey, Transcript};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResultResponse {
    pub key: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Transcript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reports `PENDING` until the job's result has been recorded.
#[tracing::instrument(skip(state))]
pub async fn transcription_result_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let key = JobKey::from_raw(key);
    let outcome = state.dispatcher.poll(&key);
    let status = outcome.status();

    let (transcript, error) = outcome
        .into_result()
        .map(|result| {
            (
                result.transcript().cloned(),
                result.error_message().map(str::to_string),
            )
        })
        .unwrap_or_default();

    tracing::debug!(job_key = %key, status = %status, "Polled transcription job");

    (
        StatusCode::OK,
        Json(TranscriptionResultResponse {
            key: key.to_string(),
            status: status.as_str().to_string(),
            transcript,
            error,
        }),
    )
}
