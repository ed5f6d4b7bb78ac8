mod config;
mod store;

pub use config::{
    Config, NotificationsConfig, StatisticsConfig, TickConfig, TimerConfig,
};
pub use store::{keys, Store};

use std::path::PathBuf;

/// Returns `~/.config/limber[-dev]/` based on LIMBER_ENV.
///
/// Set LIMBER_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIMBER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("limber-dev")
    } else {
        base_dir.join("limber")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
