use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Account service base URL, no trailing slash required
    pub base_url: String,
    /// Per-request timeout; a stalled call blocks only its own caller
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::remote(format!(
                "remote.base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::remote("remote.timeout_secs must be > 0"));
        }

        Ok(())
    }
}
