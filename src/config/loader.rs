//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, MAX_MINUTES_PER_WORKING_DAY, ServerConfig, WorkPolicy};

/// File name looked up inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # Work policy and server settings
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Minutes per day: {}", loader.work_policy().minutes_per_working_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - the file contains invalid YAML
    /// - the work policy's minutes per day fall outside `1..=1440`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        Self::validate(&config, &config_path)?;

        info!(
            path = %config_path.display(),
            minutes_per_working_day = config.work_policy.minutes_per_working_day,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, bypassing the filesystem.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &EngineConfig, path: &Path) -> EngineResult<()> {
        let minutes = config.work_policy.minutes_per_working_day;
        if minutes <= 0 {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "work_policy.minutes_per_working_day must be positive, got {}",
                    minutes
                ),
            });
        }
        if minutes > MAX_MINUTES_PER_WORKING_DAY {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "work_policy.minutes_per_working_day cannot exceed {} (one day), got {}",
                    MAX_MINUTES_PER_WORKING_DAY, minutes
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the expected-time policy.
    pub fn work_policy(&self) -> &WorkPolicy {
        &self.config.work_policy
    }

    /// Returns the HTTP listener settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}
