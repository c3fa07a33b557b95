//! Configuration management for notas.
//!
//! Loads configuration from ${NOTAS_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use crate::notify::NotificationStyle;

/// Returns the default config template (with comments).
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for notas files.
    //!
    //! Resolution order:
    //! 1. NOTAS_HOME env var
    //! 2. ~/.config/notas (default)

    use std::path::PathBuf;

    /// Returns the notas home directory.
    ///
    /// Checks NOTAS_HOME env var first, falls back to ~/.config/notas, and to
    /// the current directory when no home directory can be determined.
    pub fn notas_home() -> PathBuf {
        if let Ok(home) = std::env::var("NOTAS_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".notas"),
            |h| h.join(".config").join("notas"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        notas_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        notas_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How a rejected password is reported
    pub notifications: NotificationStyle,

    /// Toast lifetime in milliseconds
    pub toast_duration_ms: u64,

    /// Idle redraw interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Config {
    const DEFAULT_TOAST_DURATION_MS: u64 = 2000;
    const DEFAULT_TICK_RATE_MS: u64 = 100;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Tick interval, never below 10ms.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Saves only the notification style to the default config file.
    pub fn save_notification_style(style: NotificationStyle) -> Result<()> {
        Self::save_notification_style_to(&paths::config_path(), style)
    }

    /// Saves only the notification style to the config file at `path`.
    ///
    /// Preserves existing fields and comments using toml_edit. Starts from the
    /// default template when the file does not exist yet.
    pub fn save_notification_style_to(path: &Path, style: NotificationStyle) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["notifications"] = value(style.as_str());

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        tracing::debug!(path = %path.display(), "config written");
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: NotificationStyle::default(),
            toast_duration_ms: Self::DEFAULT_TOAST_DURATION_MS,
            tick_rate_ms: Self::DEFAULT_TICK_RATE_MS,
        }
    }
}
