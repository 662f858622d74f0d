mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    ENV_PREFIX, JobsSettings, LOG_FORMAT_VAR, LoggingSettings, MOCK_RESPONSE_DELAY_VAR,
    SCAFFOLD_MODE_VAR, ServerSettings, Settings, TranscriptionSettings,
};
