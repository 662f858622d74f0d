use super::{JobResult, JobStatus};

/// What a poll for a job key reports back.
///
/// Keys that were never issued also report `StillPending`.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    StillPending,
    Ready(JobResult),
}

impl PollOutcome {
    pub fn status(&self) -> JobStatus {
        match self {
            PollOutcome::StillPending => JobStatus::Pending,
            PollOutcome::Ready(result) => result.status(),
        }
    }

    pub fn into_result(self) -> Option<JobResult> {
        match self {
            PollOutcome::StillPending => None,
            PollOutcome::Ready(result) => Some(result),
        }
    }
}

impl From<Option<JobResult>> for PollOutcome {
    fn from(result: Option<JobResult>) -> Self {
        match result {
            Some(result) => PollOutcome::Ready(result),
            None => PollOutcome::StillPending,
        }
    }
}
