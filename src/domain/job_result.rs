use super::{JobStatus, Transcript};

/// Final outcome of a transcription job. Written once, never modified.
#[derive(Debug, Clone, PartialEq)]
pub enum JobResult {
    Success(Transcript),
    Failure(String),
}

impl JobResult {
    pub fn status(&self) -> JobStatus {
        match self {
            JobResult::Success(_) => JobStatus::Completed,
            JobResult::Failure(_) => JobStatus::Failed,
        }
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        match self {
            JobResult::Success(transcript) => Some(transcript),
            JobResult::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            JobResult::Success(_) => None,
            JobResult::Failure(message) => Some(message),
        }
    }
}
