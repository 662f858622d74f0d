pub mod keys;
pub mod observability;
pub mod store;
pub mod transcription;
