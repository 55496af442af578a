use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Identity file path, relative to the config directory
    pub identity_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            identity_file: String::from(DEFAULT_IDENTITY_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.identity_file.trim().is_empty() {
            return Err(ConfigError::storage("storage.identity_file must be set"));
        }

        // Keep the identity file inside the config directory
        let path = std::path::Path::new(&self.identity_file);
        if path.is_absolute() || self.identity_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.identity_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
