//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use notas_core::config::{self, NotificationStyle};

mod commands;

#[derive(Parser)]
#[command(name = "notas")]
#[command(version)]
#[command(about = "Grade tracker behind a password gate")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the notification style for this session (auto, toast, dialog)
    #[arg(long, value_name = "STYLE", value_parser = parse_style)]
    notifications: Option<NotificationStyle>,

    /// Log filter for the session log file (e.g. `debug`, `notas_tui=trace`)
    #[arg(long, value_name = "FILTER", env = "NOTAS_LOG", default_value = "info")]
    log: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write the default config file
    Init,
    /// Persist the notification style (auto, toast, dialog)
    Notifications {
        #[arg(value_parser = parse_style)]
        style: NotificationStyle,
    },
}

fn parse_style(value: &str) -> Result<NotificationStyle, String> {
    NotificationStyle::parse(value)
        .ok_or_else(|| format!("unknown style '{value}' (expected auto, toast or dialog)"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let mut config = config::Config::load().context("load config")?;
            if let Some(style) = cli.notifications {
                config.notifications = style;
            }
            commands::app::run(&config, &cli.log)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Notifications { style } => commands::config::notifications(style),
        },
    }
}
