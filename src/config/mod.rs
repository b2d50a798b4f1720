// SPDX-License-Identifier: MPL-2.0
//! This module handles the presentation's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use attract_loop::config::{self, Config, Theme};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme = Some(Theme::Light);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_MUSIC_VOLUME, GALLERY_AUTO_ADVANCE};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AttractLoop";

/// Visual theme toggled by the presentation's theme control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub theme: Option<Theme>,
    #[serde(default)]
    pub mouse_trail: Option<bool>,
    #[serde(default)]
    pub music_volume: Option<f32>,
    #[serde(default)]
    pub gallery_auto_advance_secs: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Some(Theme::Dark),
            mouse_trail: Some(false),
            music_volume: Some(DEFAULT_MUSIC_VOLUME),
            gallery_auto_advance_secs: Some(GALLERY_AUTO_ADVANCE.as_secs_f32()),
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            theme: Some(Theme::Light),
            mouse_trail: Some(true),
            music_volume: Some(0.4),
            gallery_auto_advance_secs: Some(3.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.theme, config.theme);
        assert_eq!(loaded.mouse_trail, config.mouse_trail);
        assert_eq!(loaded.music_volume, config.music_volume);
        assert_eq!(
            loaded.gallery_auto_advance_secs,
            config.gallery_auto_advance_secs
        );
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.theme, Some(Theme::Dark));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_uses_ambient_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, Some(Theme::Dark));
        assert_eq!(config.music_volume, Some(DEFAULT_MUSIC_VOLUME));
    }

    #[test]
    fn theme_toggled_flips_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
