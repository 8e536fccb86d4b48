//! Logging configuration using tracing
//!
//! The terminal belongs to the slideshow while it runs, so log output goes
//! to a daily rolling file instead of stderr.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TILESHOW_LOG";

const LOG_FILE: &str = "tileshow.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/tileshow/logs/`.
/// Log level is controlled by the `TILESHOW_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TILESHOW_LOG=debug tileshow talk.deck
/// TILESHOW_LOG=tileshow::interpreter=trace tileshow talk.deck
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("tileshow=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing::info!("tileshow {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

/// Directory the rolling log files live in
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("tileshow").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = log_directory();
        assert!(dir.ends_with("tileshow/logs"));
    }
}
