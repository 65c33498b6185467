// Rust guideline compliant 2026-10-18

//! Configuration management for Orchard.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "orchard.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for Orchard behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated latency of the mesh generator, in milliseconds.
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    /// Upper bound on a single generation, in milliseconds.
    #[serde(default = "default_generation_timeout_ms")]
    pub generation_timeout_ms: u64,

    /// Capacity of the generation event channel.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,

    /// Logging level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_generation_delay_ms() -> u64 {
    3_000
}

fn default_generation_timeout_ms() -> u64 {
    30_000
}

fn default_event_buffer() -> usize {
    256
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
            generation_timeout_ms: default_generation_timeout_ms(),
            event_buffer: default_event_buffer(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/orchard.toml`
    /// 3. Environment variables with `ORCHARD_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory that may contain `orchard.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ORCHARD_GENERATION_DELAY_MS` - Simulated generation latency
    /// - `ORCHARD_GENERATION_TIMEOUT_MS` - Generation timeout
    /// - `ORCHARD_EVENT_BUFFER` - Event channel capacity
    /// - `ORCHARD_LOG_LEVEL` - Logging level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ORCHARD_GENERATION_DELAY_MS") {
            self.generation_delay_ms = val.parse().map_err(|_| {
                Error::Config("ORCHARD_GENERATION_DELAY_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("ORCHARD_GENERATION_TIMEOUT_MS") {
            self.generation_timeout_ms = val.parse().map_err(|_| {
                Error::Config("ORCHARD_GENERATION_TIMEOUT_MS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("ORCHARD_EVENT_BUFFER") {
            self.event_buffer = val.parse().map_err(|_| {
                Error::Config("ORCHARD_EVENT_BUFFER must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("ORCHARD_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - generation_timeout_ms is zero or shorter than generation_delay_ms
    /// - event_buffer is zero
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.generation_timeout_ms == 0 {
            return Err(Error::Config(
                "generation_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.generation_timeout_ms < self.generation_delay_ms {
            return Err(Error::Config(format!(
                "generation_timeout_ms ({}) must be at least generation_delay_ms ({})",
                self.generation_timeout_ms, self.generation_delay_ms
            )));
        }

        if self.event_buffer == 0 {
            return Err(Error::Config(
                "event_buffer must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the simulated generation latency.
    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Returns the generation timeout.
    #[must_use]
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }

    /// Saves the configuration to `<config_dir>/orchard.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
