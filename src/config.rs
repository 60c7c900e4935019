//! Configuration module for Blog Pessoal

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::theme::Theme;

/// Environment variable that overrides `api_url` for one run
pub const API_URL_ENV: &str = "BLOG_PESSOAL_API_URL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme
    #[serde(default)]
    pub theme: Theme,

    /// Base URL of the Blog Pessoal backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout for each backend request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// How long a notice stays on screen, in seconds
    #[serde(default = "default_toast_duration")]
    pub toast_duration_secs: u64,
}

fn default_api_url() -> String {
    "https://blogpessoal-nest.onrender.com".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_toast_duration() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            toast_duration_secs: default_toast_duration(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path or create default, then apply the
    /// environment override
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        let mut config = Self::load_from(&path)?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(&url);
        }
        Ok(config)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Persist only the theme choice, leaving the rest of the file (and any
    /// environment override of this run) untouched
    pub fn save_theme(theme: Theme) -> Result<()> {
        Self::save_theme_to(&Self::default_path()?, theme)
    }

    /// Persist only the theme choice into the file at `path`
    pub fn save_theme_to(path: &Path, theme: Theme) -> Result<()> {
        let mut on_disk = Self::load_from(path)?;
        on_disk.theme = theme;
        on_disk.save_to(path)
    }

    /// Use `url` as the backend for this run (blank values are ignored)
    pub fn apply_api_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api_url = url.to_string();
        }
    }

    /// Request timeout
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// How long a notice stays on screen
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            api_url: "http://localhost:4000".to_string(),
            request_timeout_secs: 3,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url, "http://localhost:4000");
        assert_eq!(loaded.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://127.0.0.1:8080\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.toast_duration_secs, 5);
    }

    #[test]
    fn test_save_theme_keeps_file_api_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://127.0.0.1:8080\"\n").unwrap();

        let theme = Theme::from(Theme::all()[1]);
        Config::save_theme_to(&path, theme).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, theme);
        assert_eq!(loaded.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = Config::default();
        config.apply_api_url_override("   ");
        assert_eq!(config.api_url, default_api_url());
        config.apply_api_url_override("http://localhost:4000");
        assert_eq!(config.api_url, "http://localhost:4000");
    }
}
