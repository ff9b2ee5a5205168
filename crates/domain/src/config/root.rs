use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use crate::validators::validate_server;

const LOCAL_CONFIG_PATH: &str = "ferrous-dig.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dig/config.toml";

/// Main configuration structure for Ferrous Dig
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Lookup defaults and `dig` invocation settings
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dig.toml in current directory
    /// 3. /etc/ferrous-dig/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dig_path) = overrides.dig_path {
            self.lookup.dig_path = dig_path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Only the configured defaults are checked here; per-lookup arguments are
    /// validated again when each request is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_server(&self.lookup.default_server).map_err(ConfigError::Validation)?;

        if self.lookup.default_timeout_secs <= 0 {
            return Err(ConfigError::Validation(
                "Default timeout must be greater than 0".to_string(),
            ));
        }

        if self.lookup.dig_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dig_path cannot be empty".to_string(),
            ));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<&'static str> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH)
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH)
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dig_path: Option<String>,
    pub log_level: Option<String>,
}
