mod key_generator;
mod result_store;
mod result_store_error;
mod transcription_client;

pub use key_generator::{KeyGenerationError, KeyGenerator};
pub use result_store::ResultStore;
pub use result_store_error::ResultStoreError;
pub use transcription_client::{TranscriptionClient, TranscriptionError};
