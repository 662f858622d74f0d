use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::Transcript;

#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    /// `file_data` is the upload snapshot; cloning it is cheap.
    async fn transcribe(
        &self,
        file_data: Bytes,
        filename: &str,
    ) -> Result<Transcript, TranscriptionError>;
}

/// Display output is shown to end users; `reason` fields are for operators only.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription service is unreachable")]
    ServiceUnreachable { reason: String },
    #[error("transcription service did not respond within {timeout_secs} seconds")]
    TimedOut { timeout_secs: u64 },
    #[error("transcription service returned status {status}: {body}")]
    ServiceError { status: u16, body: String },
    #[error("could not understand response from transcription service")]
    MalformedResponse { reason: String },
}

impl TranscriptionError {
    /// Technical detail suitable for logs.
    pub fn detail(&self) -> String {
        match self {
            TranscriptionError::ServiceUnreachable { reason }
            | TranscriptionError::MalformedResponse { reason } => reason.clone(),
            other => other.to_string(),
        }
    }
}
