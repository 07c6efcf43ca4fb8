use serde::{Deserialize, Serialize};

use super::{
    CacheConfig, ConfigError, DatabaseConfig, HealthCheckConfig, LoggingConfig, ServerConfig,
};

/// Main configuration, loaded from an optional TOML file with CLI overrides
/// applied on top.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub health: HealthCheckConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides applied after the file is parsed.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub http_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub cache_url: Option<String>,
    pub cache_disabled: bool,
}

impl Config {
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.to_string(),
                    source: e,
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
                    path: path.to_string(),
                    source: e,
                })?
            }
            None => Config::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.http_port {
            self.server.http_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(url) = overrides.cache_url {
            self.cache.url = url;
        }
        if overrides.cache_disabled {
            self.cache.enabled = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 {
            return Err(ConfigError::Invalid("server.http_port must not be 0".into()));
        }

        if self.cache.default_ttl_seconds == 0 {
            return Err(ConfigError::Invalid(
                "cache.default_ttl_seconds must be greater than 0".into(),
            ));
        }

        if self.cache.connect_attempts == 0 || self.database.connect_attempts == 0 {
            return Err(ConfigError::Invalid(
                "connect_attempts must be greater than 0".into(),
            ));
        }

        if self.health.probe_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "health.probe_timeout_ms must be greater than 0".into(),
            ));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
