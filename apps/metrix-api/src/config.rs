//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default cap on explicit batch target lists.
pub const DEFAULT_MAX_BATCH_TARGETS: usize = 64;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP server port
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Maximum length of an explicit `to_units` list
    pub max_batch_targets: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            max_batch_targets: DEFAULT_MAX_BATCH_TARGETS,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: lookup("METRIX_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: match lookup("METRIX_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("METRIX_PORT".to_string()))?,
                None => defaults.port,
            },

            log_level: lookup("METRIX_LOG_LEVEL")
                .map(|level| level.trim().to_ascii_lowercase())
                .unwrap_or(defaults.log_level),

            max_batch_targets: match lookup("METRIX_MAX_BATCH_TARGETS") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("METRIX_MAX_BATCH_TARGETS".to_string()))?,
                None => defaults.max_batch_targets,
            },
        };

        if !LOG_LEVELS.contains(&config.log_level.as_str()) {
            return Err(ConfigError::InvalidValue("METRIX_LOG_LEVEL".to_string()));
        }

        if config.max_batch_targets == 0 {
            return Err(ConfigError::InvalidValue(
                "METRIX_MAX_BATCH_TARGETS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
