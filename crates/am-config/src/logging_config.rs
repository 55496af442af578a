use crate::{DEFAULT_LOG_LEVEL, LogLevel};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// None = stdout, Some = append to file
    pub file: Option<PathBuf>,
    /// Colored output (ignored when logging to file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
            colored: true,
        }
    }
}
