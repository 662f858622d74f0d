use std::fmt::Write;

use rand::RngCore;
use rand::rngs::OsRng;

use crate::application::ports::{KeyGenerationError, KeyGenerator};
use crate::domain::JobKey;

/// Random bytes per key; rendered as twice as many hex characters.
pub const KEY_BYTES: usize = 8;

/// Draws job keys from the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsKeyGenerator;

impl OsKeyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl KeyGenerator for OsKeyGenerator {
    fn generate(&self, extension_hint: &str) -> Result<JobKey, KeyGenerationError> {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| KeyGenerationError::EntropyUnavailable(e.to_string()))?;

        Ok(JobKey::new(&to_hex(&bytes), extension_hint))
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
            let _ = write!(out, "{:02x}", b);
            out
        })
}
