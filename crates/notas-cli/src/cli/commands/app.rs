//! Interactive session.

use anyhow::Result;
use notas_core::config::{self, Config};

use crate::logging;

pub fn run(config: &Config, log_filter: &str) -> Result<()> {
    logging::init(&config::paths::logs_dir(), log_filter)?;
    tracing::info!(
        notifications = config.notifications.resolve().as_str(),
        "starting session"
    );

    let result = notas_tui::run_interactive(config);
    if let Err(err) = &result {
        tracing::error!(error = %err, "session ended with error");
    }
    result
}
