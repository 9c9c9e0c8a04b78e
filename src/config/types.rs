use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    /// Detection models offered in the selector, in display order.
    #[serde(default = "default_models")]
    pub models: Vec<ModelOption>,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Model preselected on mount. `None` leaves the selector empty.
    #[serde(default)]
    pub default_model: Option<String>,
}

/// An entry of the model selector. Purely cosmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    /// Stable identifier (e.g. "model1").
    pub id: String,
    /// Label shown in the selector (e.g. "Model 1").
    pub label: String,
}

impl ModelOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Colors as `#RRGGBB` strings. Converted to a `Palette` at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_black")]
    pub black: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_safe")]
    pub safe: String,
    #[serde(default = "default_fraud")]
    pub fraud: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_input_background")]
    pub input_background: String,
}

/// Log output settings. The terminal is owned by the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `fraudshield.log` in the directory of the
    /// config file in use, including one given with `--config`.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_models() -> Vec<ModelOption> {
    vec![
        ModelOption::new("model1", "Model 1"),
        ModelOption::new("model2", "Model 2"),
        ModelOption::new("model3", "Model 3"),
    ]
}

fn default_black() -> String {
    "#000000".to_string()
}

fn default_brand() -> String {
    "#004AAD".to_string()
}

fn default_safe() -> String {
    "#039855".to_string()
}

fn default_fraud() -> String {
    "#CD2F2E".to_string()
}

fn default_subtitle() -> String {
    "#555555".to_string()
}

fn default_input_background() -> String {
    "#E3F2FD".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            models: default_models(),
            theme: ThemeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            black: default_black(),
            brand: default_brand(),
            safe: default_safe(),
            fraud: default_fraud(),
            subtitle: default_subtitle(),
            input_background: default_input_background(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
