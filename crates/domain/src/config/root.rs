use super::cache::MAX_TTL_DAYS;
use super::{CacheConfig, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "./hazard-zone.toml";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub cache_path: Option<String>,
    pub polygon_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path`, or `./hazard-zone.toml` when present, or defaults.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(path) = overrides.cache_path {
            self.database.cache_path = path;
        }
        if let Some(path) = overrides.polygon_path {
            self.database.polygon_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.cache_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.cache_path cannot be empty".to_string(),
            ));
        }
        if self.database.polygon_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.polygon_path cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.cache.heuristic_ttl_days == 0 {
            return Err(ConfigError::Validation(
                "cache.heuristic_ttl_days must be greater than 0".to_string(),
            ));
        }
        for (key, days) in [
            ("cache.authoritative_ttl_days", self.cache.authoritative_ttl_days),
            ("cache.heuristic_ttl_days", self.cache.heuristic_ttl_days),
        ] {
            if days > MAX_TTL_DAYS {
                return Err(ConfigError::Validation(format!(
                    "{key} must be at most {MAX_TTL_DAYS}"
                )));
            }
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
