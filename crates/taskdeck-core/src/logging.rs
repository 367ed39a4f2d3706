//! Tracing setup.
//!
//! The terminal belongs to the UI while the screen is up, so log output goes
//! to `$TASKDECK_HOME/taskdeck.log` instead of stdout/stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the log filter: `RUST_LOG` wins, otherwise the configured level.
///
/// # Errors
/// Returns an error if the configured directive cannot be parsed.
pub fn build_filter(configured: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
        .with_context(|| format!("Invalid log_level directive: {configured}"))
}

/// Installs the global subscriber writing to `log_path`.
///
/// Keep the returned guard alive for the whole process; dropping it flushes
/// and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already set.
pub fn init(log_path: &Path, configured_level: &str) -> Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = log_path
        .file_name()
        .context("Log path has no file name")?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(build_filter(configured_level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_rejects_garbage() {
        // Only meaningful when RUST_LOG is not set for the test process.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(build_filter("taskdeck=loud").is_err());
        assert!(build_filter("info").is_ok());
    }
}
