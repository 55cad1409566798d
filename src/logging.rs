//! Logging setup
//!
//! The TUI owns the terminal, so interactive play logs to a daily rolling file.
//! Text-mode commands log to stderr.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// `hangman.log` under [`log_dir`]
    File,
    Stderr,
}

impl LogTarget {
    const fn default_filter(self) -> &'static str {
        match self {
            Self::File => "info",
            Self::Stderr => "warn",
        }
    }
}

/// File name prefix used by the rolling appender
pub const LOG_FILE_PREFIX: &str = "hangman.log";

/// Return the log directory path.
///
/// Precedence: `HANGMAN_LOG_DIR` env var > platform data dir > `./logs`.
#[must_use]
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var("HANGMAN_LOG_DIR").ok(), dirs::data_dir())
}

fn resolve_log_dir(env_override: Option<String>, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    data_dir.map_or_else(
        || PathBuf::from("logs"),
        |data| data.join("hangman").join("logs"),
    )
}

fn filter_for(target: LogTarget) -> EnvFilter {
    EnvFilter::try_from_env("HANGMAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(target.default_filter()))
}

/// Initialize the global tracing subscriber.
///
/// Filter controlled by `HANGMAN_LOG` or `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = filter_for(target);

    match target {
        LogTarget::File => {
            let dir = log_dir();
            init_file(&dir, filter)
        }
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
            Ok(())
        }
    }
}

fn init_file(dir: &Path, filter: EnvFilter) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let appender = rolling::daily(dir, LOG_FILE_PREFIX);
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_prefers_env_override() {
        let dir = resolve_log_dir(
            Some("/tmp/hangman-test-logs".to_string()),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(dir, PathBuf::from("/tmp/hangman-test-logs"));
    }

    #[test]
    fn log_dir_ignores_empty_override() {
        let dir = resolve_log_dir(Some(String::new()), Some(PathBuf::from("/data")));
        assert_eq!(dir, PathBuf::from("/data/hangman/logs"));
    }

    #[test]
    fn log_dir_falls_back_to_relative() {
        assert_eq!(resolve_log_dir(None, None), PathBuf::from("logs"));
    }

    #[test]
    fn default_filters_per_target() {
        assert_eq!(LogTarget::File.default_filter(), "info");
        assert_eq!(LogTarget::Stderr.default_filter(), "warn");
    }
}
