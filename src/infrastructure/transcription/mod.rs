mod mock_transcription_client;
mod transcription_client_factory;
mod whisper_http_client;

pub use mock_transcription_client::MockTranscriptionClient;
pub use transcription_client_factory::{ClientConfigError, TranscriptionClientFactory};
pub use whisper_http_client::{FILE_FIELD, RESPONSE_FORMAT, RESPONSE_FORMAT_FIELD, WhisperHttpClient};
