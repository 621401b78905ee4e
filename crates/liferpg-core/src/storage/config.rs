//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default profile name
//! - Notification preferences (level-up sound, volume)
//! - UI toggles (streak badges, history panel)
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, CoreError};

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: u32,
    /// Play a sound when a completion triggers a level-up.
    #[serde(default = "default_true")]
    pub sound_on_level_up: bool,
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_streaks: bool,
    #[serde(default = "default_true")]
    pub show_history: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Profile used when the caller does not name one.
    #[serde(default = "default_profile")]
    pub default_profile: String,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_true() -> bool {
    true
}
fn default_volume() -> u32 {
    50
}
fn default_profile() -> String {
    "Player 1".into()
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: default_volume(),
            sound_on_level_up: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_streaks: true,
            show_history: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            notifications: NotificationsConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default config on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_profile" => Some(self.default_profile.clone()),
            "notifications.enabled" => Some(self.notifications.enabled.to_string()),
            "notifications.volume" => Some(self.notifications.volume.to_string()),
            "notifications.sound_on_level_up" => {
                Some(self.notifications.sound_on_level_up.to_string())
            }
            "ui.show_streaks" => Some(self.ui.show_streaks.to_string()),
            "ui.show_history" => Some(self.ui.show_history.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dotted key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// for the key's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
        where
            T::Err: std::fmt::Display,
        {
            value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })
        }

        match key {
            "default_profile" => self.default_profile = value.to_string(),
            "notifications.enabled" => self.notifications.enabled = parse(key, value)?,
            "notifications.volume" => self.notifications.volume = parse(key, value)?,
            "notifications.sound_on_level_up" => {
                self.notifications.sound_on_level_up = parse(key, value)?;
            }
            "ui.show_streaks" => self.ui.show_streaks = parse(key, value)?,
            "ui.show_history" => self.ui.show_history = parse(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()
    }
}
