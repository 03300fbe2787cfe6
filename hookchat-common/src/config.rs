//! Configuration loading for hookchat.
//!
//! The webhook endpoint comes from the `HOOKCHAT_WEBHOOK_URL` environment
//! variable, falling back to an optional JSON config file at
//! `~/.hookchat/config.json`. Absence leaves the system unconfigured: chat
//! is disabled and only the connection-test diagnostic is available.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::UserDirs;
use serde::Deserialize;

/// Environment variable holding the webhook endpoint.
pub const WEBHOOK_URL_ENV: &str = "HOOKCHAT_WEBHOOK_URL";

/// On-disk config file shape. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    webhook_url: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Webhook endpoint; empty string when unconfigured.
    pub webhook_url: String,
    /// Base log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format: "pretty" or "json".
    pub log_format: String,
    /// Path the config file was (or would be) read from.
    pub config_path: PathBuf,
}

impl Config {
    /// Load configuration from the default file location and environment.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific config file path, applying
    /// environment overrides. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<ConfigFile>(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            ConfigFile::default()
        };

        let webhook_url = std::env::var(WEBHOOK_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or(file.webhook_url)
            .unwrap_or_default();

        Ok(Self {
            webhook_url,
            log_level: file.log_level.unwrap_or_else(|| "info".to_string()),
            log_format: file.log_format.unwrap_or_else(|| "pretty".to_string()),
            config_path: path.to_path_buf(),
        })
    }

    /// Default config file path: `~/.hookchat/config.json`.
    pub fn default_path() -> PathBuf {
        UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".hookchat/config.json"))
            .unwrap_or_else(|| PathBuf::from(".hookchat/config.json"))
    }

    /// Whether an endpoint has been provided at all.
    pub fn is_configured(&self) -> bool {
        !self.webhook_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "pretty");
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"webhook_url": "https://example.com/webhook", "log_level": "debug"}}"#
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.webhook_url, "https://example.com/webhook");
        assert_eq!(config.log_level, "debug");
        assert!(config.is_configured());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
