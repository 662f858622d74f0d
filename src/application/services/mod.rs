mod job_dispatcher;
mod transcription_worker;

pub use job_dispatcher::{DispatchError, JobDispatcher};
pub use transcription_worker::{TranscriptionMessage, TranscriptionWorker, failure_message};
