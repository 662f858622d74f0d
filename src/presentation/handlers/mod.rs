mod error_response;
mod health;
mod transcription_result;
mod upload;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use transcription_result::{TranscriptionResultResponse, transcription_result_handler};
pub use upload::{SubmitResponse, TRANSCRIPTIONS_PATH, UPLOAD_FIELD, poll_url, upload_handler};
