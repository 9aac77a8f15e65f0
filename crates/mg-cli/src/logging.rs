//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The interactive app draws over the whole
//! terminal, so it only logs when `general.log_file` names a file.

use std::path::Path;

use anyhow::Context;
use mg_config::GeneralConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Overrides the `--quiet` / `--verbose` level when set.
pub const LOG_ENV: &str = "MINDGUARD_LOG";

const fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn env_filter(quiet: bool, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(quiet, verbose)))
}

pub fn init_stderr(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Install a non-blocking file subscriber if a log file is configured.
///
/// The returned guard flushes buffered lines on drop and must outlive the app.
pub fn init_file(
    general: &GeneralConfig,
    quiet: bool,
    verbose: bool,
) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = general.log_file_path() else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(Some(guard))
}

fn open_log_file(path: &Path) -> anyhow::Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, "warn")]
    #[case(true, false, "error")]
    #[case(false, true, "debug")]
    #[case(true, true, "error")]
    fn level_follows_flags(#[case] quiet: bool, #[case] verbose: bool, #[case] expected: &str) {
        assert_eq!(default_level(quiet, verbose), expected);
    }

    #[test]
    fn log_file_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("mindguard.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
