use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::theme::{parse_hex_color, Palette};

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
    /// Directory holding the config file and the default log file.
    ///
    /// Uses `dirs::config_dir()`, falling back to the current directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fraudshield")
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
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

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one model is configured
    /// - Model ids are unique
    /// - The default model, if set, is one of the configured models
    /// - Every theme color is a `#RRGGBB` value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one model must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if !seen.insert(model.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate model id '{}'", model.id),
                });
            }
        }

        if let Some(default) = &self.ui.default_model {
            self.ensure_model(default)?;
        }

        self.palette().map(|_| ())
    }

    /// Fails with a validation error naming the available ids when `id` is unknown.
    pub fn ensure_model(&self, id: &str) -> Result<(), ConfigError> {
        if self.models.iter().any(|m| m.id == id) {
            return Ok(());
        }
        let available: Vec<&str> = self.models.iter().map(|m| m.id.as_str()).collect();
        Err(ConfigError::ValidationError {
            message: format!(
                "Model '{}' not found. Available models: {}",
                id,
                available.join(", ")
            ),
        })
    }

    /// Build the color palette from the theme section.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let theme = &self.theme;
        let color = |name: &str, value: &str| {
            parse_hex_color(value).ok_or_else(|| ConfigError::ValidationError {
                message: format!("Invalid color for theme.{}: '{}'", name, value),
            })
        };
        Ok(Palette {
            black: color("black", &theme.black)?,
            brand: color("brand", &theme.brand)?,
            safe: color("safe", &theme.safe)?,
            fraud: color("fraud", &theme.fraud)?,
            subtitle: color("subtitle", &theme.subtitle)?,
            input_background: color("input_background", &theme.input_background)?,
        })
    }

    /// Resolved log file path: the `logging.file` override, or
    /// `fraudshield.log` beside the config file at `config_path`.
    pub fn log_path(&self, config_path: &Path) -> PathBuf {
        match &self.logging.file {
            Some(file) => PathBuf::from(file),
            None => config_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("fraudshield.log"),
        }
    }
}
