//! File logging for wifi-doctor.
//!
//! The terminal belongs to the TUI, so events only go to
//! `<log_dir>/wifi-doctor.log`, which is truncated at session start.
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "wifi-doctor.log";

/// Keeps the background writer alive; dropping it flushes the log.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

pub fn init_logging(log_dir: &Path) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(LOG_FILE), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only one test may install the global subscriber.
    #[test]
    fn init_truncates_previous_log() {
        let dir = tempfile::TempDir::new().unwrap();
        let log_path = dir.path().join(LOG_FILE);
        fs::write(&log_path, "stale session").unwrap();

        let guard = init_logging(dir.path());
        assert!(guard.is_ok());
        assert!(log_path.exists());
        assert!(!fs::read_to_string(&log_path).unwrap().contains("stale session"));
    }
}
