use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranscriptionClient;
use crate::presentation::config::{ScaffoldConfig, TranscriptionSettings};

use super::mock_transcription_client::MockTranscriptionClient;
use super::whisper_http_client::WhisperHttpClient;

pub struct TranscriptionClientFactory;

impl TranscriptionClientFactory {
    pub fn create(
        settings: &TranscriptionSettings,
        scaffold: &ScaffoldConfig,
    ) -> Result<Arc<dyn TranscriptionClient>, ClientConfigError> {
        if scaffold.enabled {
            tracing::warn!(
                delay_ms = scaffold.mock_response_delay_ms,
                "Scaffold mode: using mock transcription client"
            );
            let client = MockTranscriptionClient::new(scaffold.mock_delay());
            return Ok(Arc::new(client));
        }

        if settings.timeout_secs == 0 {
            return Err(ClientConfigError::InvalidTimeout);
        }

        let client = WhisperHttpClient::new(
            &settings.base_url,
            &settings.inference_path,
            Duration::from_secs(settings.timeout_secs),
        );

        reqwest::Url::parse(client.endpoint()).map_err(|e| ClientConfigError::InvalidEndpoint {
            endpoint: client.endpoint().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(endpoint = %client.endpoint(), "Using whisper transcription service");
        Ok(Arc::new(client))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("invalid transcription endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("transcription timeout must be at least one second")]
    InvalidTimeout,
}
