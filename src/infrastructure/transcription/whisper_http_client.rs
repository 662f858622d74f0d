use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart;

use crate::application::ports::{TranscriptionClient, TranscriptionError};
use crate::domain::Transcript;
use crate::infrastructure::observability::sanitize_diagnostic;

pub const FILE_FIELD: &str = "file";
pub const RESPONSE_FORMAT_FIELD: &str = "response-format";
/// The only format `Transcript::from_json` accepts.
pub const RESPONSE_FORMAT: &str = "verbose_json";

/// Client for a whisper.cpp style inference server.
pub struct WhisperHttpClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl WhisperHttpClient {
    pub fn new(base_url: &str, inference_path: &str, timeout: Duration) -> Self {
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            inference_path.trim_start_matches('/'),
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, error: reqwest::Error) -> TranscriptionError {
        if error.is_timeout() {
            TranscriptionError::TimedOut {
                timeout_secs: self.timeout.as_secs_f64().ceil() as u64,
            }
        } else {
            TranscriptionError::ServiceUnreachable {
                reason: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl TranscriptionClient for WhisperHttpClient {
    async fn transcribe(
        &self,
        file_data: Bytes,
        filename: &str,
    ) -> Result<Transcript, TranscriptionError> {
        let size_bytes = file_data.len();
        let file_part = multipart::Part::stream_with_length(file_data, size_bytes as u64)
            .file_name(filename.to_string());

        let form = multipart::Form::new()
            .part(FILE_FIELD, file_part)
            .text(RESPONSE_FORMAT_FIELD, RESPONSE_FORMAT);

        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = size_bytes,
            "Sending file to transcription service"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::ServiceError {
                status: status.as_u16(),
                body: sanitize_diagnostic(&body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        let transcript =
            Transcript::from_json(&body).map_err(|e| TranscriptionError::MalformedResponse {
                reason: e.to_string(),
            })?;

        tracing::info!(
            chars = transcript.text.len(),
            segments = transcript.segments.len(),
            "Transcription service responded"
        );

        Ok(transcript)
    }
}
