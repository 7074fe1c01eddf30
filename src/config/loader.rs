use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/e180r/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("e180r").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    ///
    /// Not validated here: overrides may still replace the base URL, so
    /// callers run [`Config::validate`] once they are applied.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Apply base URL overrides. The flag wins over the environment, which
    /// wins over the file. Empty values count as unset.
    pub fn with_base_url_overrides(mut self, env: Option<String>, flag: Option<String>) -> Self {
        let chosen = flag
            .filter(|value| !value.trim().is_empty())
            .or_else(|| env.filter(|value| !value.trim().is_empty()));
        if let Some(base_url) = chosen {
            self.api.base_url = base_url.trim().to_string();
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute `http` or `https` URL
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        let url = reqwest::Url::parse(base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base URL '{}': {}", base_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Base URL '{}' must use http or https, got '{}'",
                    base_url,
                    url.scheme()
                ),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "connect_timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
