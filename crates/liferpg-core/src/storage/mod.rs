mod config;
pub mod database;

pub use config::{Config, NotificationsConfig, UiConfig};
pub use database::{Database, XpEntry};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns the data directory, `~/.config/liferpg/` by default.
///
/// Set `LIFERPG_DATA_DIR` to use a different directory (tests point this at
/// a temporary directory for isolation).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let dir = match std::env::var_os("LIFERPG_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("liferpg"),
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
