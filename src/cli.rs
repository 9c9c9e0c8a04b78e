use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "fraudshield", version, about = "Check suspicious messages for fraud")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preselect a detection model by id
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(model) = &self.model {
            config.ensure_model(model)?;
            config.ui.default_model = Some(model.clone());
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.to_string_lossy().into_owned());
        }
        Ok(())
    }
}
