//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section has defaults, so an empty file (or no file) describes the stock
//! `default/my-postgres` workload polled every five seconds.
//!
//! # Example
//!
//! ```no_run
//! use sentinel::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     let desired = config.desired_workload()?;
//!     println!("guarding {desired}");
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cluster::{ClusterConfig, ReconcilerConfig};
use super::logging::LoggingConfig;
use super::workload::WorkloadConfig;
use crate::domain::DesiredWorkload;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Reconcile loop timing.
    #[serde(default)]
    pub reconciler: ReconcilerConfig,

    /// The workload to keep alive.
    #[serde(default)]
    pub workload: WorkloadConfig,

    /// How to reach the cluster.
    #[serde(default)]
    pub cluster: ClusterConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.reconciler.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        self.workload.validate()
    }

    /// Build the desired workload descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if an env entry refers to an unset variable.
    pub fn desired_workload(&self) -> Result<DesiredWorkload> {
        self.workload.to_desired()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
