//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/scanalert/logs/`
/// Log level is controlled by `SCANALERT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SCANALERT_LOG=debug cargo run
/// SCANALERT_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "scanalert.log");

    // Default to info, allow override via SCANALERT_LOG
    let env_filter = EnvFilter::try_from_env("SCANALERT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("scanalert=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Logging initialized");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("scanalert").join("logs")
}

/// Get the log file path for the current day
pub fn current_log_file() -> PathBuf {
    get_log_directory().join("scanalert.log")
}
