//! Full-screen TUI for notas: login gate and grade tracker.

pub mod common;
pub mod effects;
pub mod events;
pub mod notifications;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use notas_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive app until the user quits.
pub fn run_interactive(config: &Config) -> Result<()> {
    // The TUI needs a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "notas requires a terminal.\n\
             Use `notas config path` or `notas --help` for non-interactive commands."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()
}
