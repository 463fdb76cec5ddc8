// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's persisted configuration: the user's audio
//! preferences (volume level, mute, loop), loaded from and saved to a
//! `settings.toml` file. Playback position is deliberately never persisted.
//!
//! # Examples
//!
//! ```no_run
//! use iced_mediabar::config::{self, Config};
//!
//! // Load existing preferences
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.muted = Some(true);
//!
//! // Save the modified preferences
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MediaBar";

/// Default control-side volume level (0–100 scale).
pub const DEFAULT_VOLUME_LEVEL: f32 = 80.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Volume control value on the 0–100 scale.
    #[serde(default)]
    pub volume: Option<f32>,
    #[serde(default)]
    pub muted: Option<bool>,
    #[serde(default)]
    pub loop_playback: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume: Some(DEFAULT_VOLUME_LEVEL),
            muted: Some(false),
            loop_playback: Some(false),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            volume: Some(37.0),
            muted: Some(true),
            loop_playback: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.volume, config.volume);
        assert_eq!(loaded.muted, config.muted);
        assert_eq!(loaded.loop_playback, config.loop_playback);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "volume = [not valid").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.volume, Some(DEFAULT_VOLUME_LEVEL));
        assert_eq!(loaded.muted, Some(false));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let loaded: Config = toml::from_str("muted = true").expect("failed to parse");

        assert_eq!(loaded.muted, Some(true));
        assert_eq!(loaded.volume, None);
        assert_eq!(loaded.loop_playback, None);
    }

    #[test]
    fn default_has_audible_unmuted_volume() {
        let config = Config::default();
        assert_eq!(config.volume, Some(DEFAULT_VOLUME_LEVEL));
        assert_eq!(config.muted, Some(false));
        assert_eq!(config.loop_playback, Some(false));
    }
}
