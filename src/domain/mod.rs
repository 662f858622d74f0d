mod file_upload;
mod job_key;
mod job_result;
mod job_status;
mod poll_outcome;
mod transcript;

pub use file_upload::FileUpload;
pub use job_key::JobKey;
pub use job_result::JobResult;
pub use job_status::JobStatus;
pub use poll_outcome::PollOutcome;
pub use transcript::{Segment, Transcript, TranscriptParseError};
