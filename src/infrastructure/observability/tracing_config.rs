use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_directive: String,
}

impl TracingConfig {
    pub fn from_settings(logging: &LoggingSettings, environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            json_format: logging.enable_json,
            default_directive: format!("{},bscribe=debug,tower_http=debug", logging.level),
        }
    }
}
