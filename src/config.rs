//! Loading and saving user preferences to a `settings.toml` file.
//!
//! Preferences are few: the UI language and the theme mode. A missing or
//! malformed file falls back to defaults rather than surfacing an error,
//! since nothing here is critical to running the application.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAccounts";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme: ThemeMode,
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
            language: Some("fr".to_string()),
            theme: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme, config.theme);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.theme, ThemeMode::System);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            language: Some("en-US".to_string()),
            theme: ThemeMode::Light,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_uses_system_theme() {
        let config = Config::default();
        assert!(config.language.is_none());
        assert_eq!(config.theme, ThemeMode::System);
    }
}
