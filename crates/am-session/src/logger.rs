use crate::{Result, SessionError};

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize logger with fern
///
/// # Arguments
/// * `config` - Logging section: level, optional file target, color flag
#[track_caller]
pub fn initialize(config: &am_config::LoggingConfig) -> Result<()> {
    let level_filter = config.level.0;

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref log_path) = config.file {
        // File output (no colors, plain format)
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| {
                SessionError::logger(format!(
                    "Failed to open log file {}: {}",
                    log_path.display(),
                    e
                ))
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(file)
    } else if config.colored {
        // Colored output for TTY
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        // Plain output for non-TTY
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| SessionError::logger(format!("Failed to initialize logger: {e}")))?;

    info!("Logger initialized: level={level_filter:?}");

    Ok(())
}
