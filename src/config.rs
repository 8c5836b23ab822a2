//! Configuration management for the wellbeing coach
//!
//! TOML-based configuration with defaults and validation.
//! Location: ~/.wellbeing-coach/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::advice::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::coach::StalePolicy;
use crate::errors::{CoachError, Result};
use crate::stats::TimeRange;

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub coach: CoachConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Model API connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

/// Dashboard behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub default_range: TimeRange,
    pub stale_policy: StalePolicy,
    pub notification_ttl_ms: u64,
}

/// Terminal output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_spinner: bool,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            default_range: TimeRange::Today,
            stale_policy: StalePolicy::LatestIssued,
            notification_ttl_ms: 3000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_spinner: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoachError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| CoachError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or built-in defaults if absent
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".wellbeing-coach").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.gemini.model.trim().is_empty() {
            return Err(CoachError::ConfigError("model must not be empty".to_string()));
        }

        if !self.gemini.base_url.starts_with("http://")
            && !self.gemini.base_url.starts_with("https://")
        {
            return Err(CoachError::ConfigError(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.gemini.base_url
            )));
        }

        if self.gemini.api_key_env.trim().is_empty() {
            return Err(CoachError::ConfigError(
                "api_key_env must name an environment variable".to_string(),
            ));
        }

        if self.gemini.timeout_secs == 0 {
            return Err(CoachError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| CoachError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
