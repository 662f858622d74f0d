use std::time::Duration;

use serde::Deserialize;

/// Scaffold mode swaps the transcription service for a canned local responder.
///
/// Set through `[scaffold]` settings or the `SCAFFOLD_MODE` and `MOCK_RESPONSE_DELAY` variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mock_response_delay_ms: u64,
}

impl ScaffoldConfig {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_response_delay_ms)
    }
}
