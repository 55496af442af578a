use crate::{ConfigError, ConfigErrorResult, LoggingConfig, RemoteConfig, StorageConfig};

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AM_CONFIG_DIR env var, else use ./.am/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            ClientConfig::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AM_CONFIG_DIR env var > ./.am/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("AM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".am"))
    }

    /// Apply AM_* environment variable overrides on top of file values.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("AM_REMOTE_URL") {
            self.remote.base_url = url;
        }

        if let Ok(raw) = std::env::var("AM_REMOTE_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.remote.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring unparsable AM_REMOTE_TIMEOUT_SECS={raw:?}"),
            }
        }

        if let Ok(level) = std::env::var("AM_LOG_LEVEL") {
            // FromStr never fails; unknown values fall back to info
            self.logging.level = crate::LogLevel::from_str(&level).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.remote.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Absolute path to the identity file.
    pub fn identity_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.identity_file))
    }
}
