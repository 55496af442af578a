mod client_config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;
mod storage_config;

pub use client_config::ClientConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;
pub use storage_config::StorageConfig;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_IDENTITY_FILENAME: &str = "identity.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
