// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[server]` - Detection service base URL
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `VERI_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use veri_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::app::paths;
use crate::detection::client::DEFAULT_SERVER_URL;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Detection service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServerConfig {
    /// Base URL of the detection service. `None` means the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Root configuration, mirroring the sections of `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// The effective detection server base URL.
    #[must_use]
    pub fn server_url(&self) -> &str {
        self.server.base_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the configuration and an optional notification key describing why
/// defaults were substituted (unreadable or malformed file).
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration, resolving the directory with an optional override.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration, resolving the directory with an optional override.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Err(crate::error::Error::Config(
            "could not determine config directory".to_string(),
        ));
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path, creating parent
/// directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.server.base_url, None);
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.server.base_url = Some("http://detector.local:8080".to_string());

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded, config);
        assert_eq!(loaded.server_url(), "http://detector.local:8080");
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "this is not { toml").expect("write");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("deep").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save");
        assert!(path.exists());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "not [valid toml").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(loaded, config);
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.server.base_url, None);
    }
}
