//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "DROID_LAUNCH_LOG";

const LOG_FILE_NAME: &str = "droid-launch.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/droid-launch/logs/` so that stdout
/// stays reserved for command tokens and JSON output.
/// Log level is controlled by the `DROID_LAUNCH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DROID_LAUNCH_LOG=debug droid-launch platform
/// DROID_LAUNCH_LOG=droid_adb=trace droid-launch start-cmd --pkg com.example --activity .Main
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via DROID_LAUNCH_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("droid_launch=info,warn"));

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

    tracing::info!(
        "droid-launch starting, log file: {}",
        get_current_log_file()?.display()
    );

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("droid-launch").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}
