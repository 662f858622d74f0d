mod diagnostic_sanitizer;
mod init_tracing;
mod request_id;
mod tracing_config;

pub use diagnostic_sanitizer::sanitize_diagnostic;
pub use init_tracing::{build_subscriber, init_tracing};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use tracing_config::TracingConfig;
