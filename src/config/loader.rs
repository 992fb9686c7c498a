use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::login::MIN_COLUMN_WIDTH;

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
    /// `~/.config/toa-login/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("toa-login").join("config.toml")
    }

    /// Loads the default config file. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Checks:
    /// - `ui.mask_char` is exactly one character
    /// - `ui.tick_rate_ms` is positive
    /// - `ui.max_width` leaves room for the form
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.mask_char.chars().count() != 1 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.mask_char must be exactly one character, got '{}'",
                    self.ui.mask_char
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.max_width < MIN_COLUMN_WIDTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.max_width must be at least {}, got {}",
                    MIN_COLUMN_WIDTH, self.ui.max_width
                ),
            });
        }

        Ok(())
    }
}
