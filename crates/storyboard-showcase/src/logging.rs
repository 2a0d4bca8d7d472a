#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so events are only emitted when a log file
//! is configured. Filter directives come from `STORYBOARD_LOG`, then
//! `RUST_LOG`, then default to `info`.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable consulted first for filter directives.
pub const LOG_ENV: &str = "STORYBOARD_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be created.
    Open { path: PathBuf, source: io::Error },
    /// A global subscriber is already installed.
    AlreadyInitialized,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::AlreadyInitialized => f.write_str("tracing subscriber already initialized"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::AlreadyInitialized => None,
        }
    }
}

/// Pick the filter directives: `STORYBOARD_LOG`, then `RUST_LOG`, then `info`.
pub fn filter_directives(lookup: impl Fn(&str) -> Option<String>) -> String {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a global fmt subscriber writing to `path`.
///
/// Does nothing when `path` is `None`.
pub fn init(path: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let directives = filter_directives(|key| std::env::var(key).ok());
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&directives))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;
    tracing::info!(path = %path.display(), %directives, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storyboard_log_wins() {
        let directives = filter_directives(|key| match key {
            "STORYBOARD_LOG" => Some("storyboard_core=trace".into()),
            "RUST_LOG" => Some("warn".into()),
            _ => None,
        });
        assert_eq!(directives, "storyboard_core=trace");
    }

    #[test]
    fn falls_back_to_rust_log_then_default() {
        let directives = filter_directives(|key| (key == "RUST_LOG").then(|| "debug".into()));
        assert_eq!(directives, "debug");
        assert_eq!(filter_directives(|_| None), "info");
    }

    #[test]
    fn blank_values_are_skipped() {
        let directives = filter_directives(|key| match key {
            "STORYBOARD_LOG" => Some("  ".into()),
            _ => None,
        });
        assert_eq!(directives, "info");
    }

    #[test]
    fn no_path_is_a_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unopenable_path_reports_error() {
        let err = init(Some(Path::new("/nonexistent-dir/for/storyboard.log"))).unwrap_err();
        assert!(matches!(err, LoggingError::Open { .. }));
        assert!(err.to_string().contains("storyboard.log"));
    }
}
