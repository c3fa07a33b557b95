use anyhow::{Context, Result};
use notas_core::config::{self, NotificationStyle};

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn notifications(style: NotificationStyle) -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::save_notification_style(style)
        .with_context(|| format!("update config at {}", config_path.display()))?;
    println!("Notifications set to {}", style.as_str());
    Ok(())
}
