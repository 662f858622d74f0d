use crate::domain::JobKey;

pub trait KeyGenerator: Send + Sync {
    /// Issues a fresh key ending in `extension_hint`.
    fn generate(&self, extension_hint: &str) -> Result<JobKey, KeyGenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum KeyGenerationError {
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),
}
