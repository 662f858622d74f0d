use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::{Environment, ScaffoldConfig};

pub const ENV_PREFIX: &str = "APP";
pub const SCAFFOLD_MODE_VAR: &str = "SCAFFOLD_MODE";
pub const MOCK_RESPONSE_DELAY_VAR: &str = "MOCK_RESPONSE_DELAY";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub jobs: JobsSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub base_url: String,
    pub inference_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsSettings {
    pub queue_capacity: usize,
    pub max_concurrent_jobs: usize,
    /// Zero keeps results for the lifetime of the process.
    pub result_ttl_secs: u64,
    pub eviction_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl JobsSettings {
    pub fn result_ttl(&self) -> Option<Duration> {
        (self.result_ttl_secs > 0).then(|| Duration::from_secs(self.result_ttl_secs))
    }

    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.eviction_interval_secs.max(1))
    }
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.<env>` file and `APP_*`
    /// environment variables (`__` separates nested keys, e.g. `APP_JOBS__QUEUE_CAPACITY`).
    /// `SCAFFOLD_MODE`, `MOCK_RESPONSE_DELAY` and `LOG_FORMAT` override everything else.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_with_vars(environment, |name| std::env::var(name).ok())
    }

    /// Same as [`Settings::load`], reading the override variables through `var`.
    pub fn load_with_vars(
        environment: Environment,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let scaffold_enabled = var(SCAFFOLD_MODE_VAR).map(|v| is_enabled_flag(&v));
        let mock_delay_ms = var(MOCK_RESPONSE_DELAY_VAR)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|ms| *ms >= 0);
        let json_logs = var(LOG_FORMAT_VAR).map(|v| v.trim().eq_ignore_ascii_case("json"));

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_mb", 100)?
            .set_default("transcription.base_url", "http://127.0.0.1:8080")?
            .set_default("transcription.inference_path", "/inference")?
            .set_default("transcription.timeout_secs", 300)?
            .set_default("jobs.queue_capacity", 64)?
            .set_default("jobs.max_concurrent_jobs", 4)?
            .set_default("jobs.result_ttl_secs", 3600)?
            .set_default("jobs.eviction_interval_secs", 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("scaffold.enabled", scaffold_enabled)?
            .set_override_option("scaffold.mock_response_delay_ms", mock_delay_ms)?
            .set_override_option("logging.enable_json", json_logs)?
            .build()?
            .try_deserialize()
    }
}

fn is_enabled_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
