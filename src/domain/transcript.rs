use serde::{Deserialize, Serialize};

/// Structured transcript returned by the speech-to-text service in
/// `verbose_json` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Audio duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_logprob: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_speech_prob: Option<f64>,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            task: None,
            language: None,
            duration: None,
            segments: Vec::new(),
        }
    }

    /// Parses and validates a response body. Partially valid documents are rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, TranscriptParseError> {
        let transcript: Transcript = serde_json::from_slice(body)?;
        transcript.validate()?;
        Ok(transcript)
    }

    fn validate(&self) -> Result<(), TranscriptParseError> {
        if let Some(duration) = self.duration {
            if !duration.is_finite() || duration < 0.0 {
                return Err(TranscriptParseError::InvalidDuration(duration));
            }
        }

        for segment in &self.segments {
            if !segment.start.is_finite() || !segment.end.is_finite() {
                return Err(TranscriptParseError::InvalidSegment {
                    id: segment.id,
                    reason: "timestamps must be finite".to_string(),
                });
            }
            if segment.end < segment.start {
                return Err(TranscriptParseError::InvalidSegment {
                    id: segment.id,
                    reason: format!("end {} precedes start {}", segment.end, segment.start),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptParseError {
    #[error("invalid transcript document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid duration: {0}")]
    InvalidDuration(f64),
    #[error("invalid segment {id}: {reason}")]
    InvalidSegment { id: u32, reason: String },
}
