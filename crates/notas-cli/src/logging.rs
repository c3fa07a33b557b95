//! File logging.
//!
//! The TUI owns stdout, so logs go to `$NOTAS_HOME/logs/notas.log`. The filter
//! comes from `--log` or `NOTAS_LOG` (e.g. `NOTAS_LOG=debug`), defaulting to
//! `info`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "notas.log";

/// Installs the global subscriber writing to `log_dir`.
///
/// # Errors
/// Returns an error if `filter` is not a valid `EnvFilter` directive list or
/// the log directory cannot be created.
pub fn init(log_dir: &Path, filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter '{filter}'"))?;

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {err}"))
}
