use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{TranscriptionClient, TranscriptionError};
use crate::domain::{Segment, Transcript};

/// Answers every request with a canned transcript naming the uploaded file.
pub struct MockTranscriptionClient {
    delay: Duration,
}

impl MockTranscriptionClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TranscriptionClient for MockTranscriptionClient {
    async fn transcribe(
        &self,
        file_data: Bytes,
        filename: &str,
    ) -> Result<Transcript, TranscriptionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = format!("Mock transcript of {} ({} bytes)", filename, file_data.len());
        Ok(Transcript {
            task: Some("transcribe".to_string()),
            language: Some("en".to_string()),
            duration: Some(1.0),
            segments: vec![Segment {
                id: 0,
                start: 0.0,
                end: 1.0,
                text: text.clone(),
                tokens: Vec::new(),
                temperature: None,
                avg_logprob: None,
                compression_ratio: None,
                no_speech_prob: None,
            }],
            text,
        })
    }
}
