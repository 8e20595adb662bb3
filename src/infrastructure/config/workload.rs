//! Desired workload configuration.
//!
//! Mirrors [`DesiredWorkload`] field for field. Environment variable values
//! can be given literally or pulled from the process environment with
//! `from_env`, so secrets need not live in the config file.

use serde::{Deserialize, Serialize};

use crate::domain::workload::{
    DEFAULT_CONTAINER, DEFAULT_IMAGE, DEFAULT_NAME, DEFAULT_NAMESPACE,
    DEFAULT_PASSWORD_PLACEHOLDER, DEFAULT_PASSWORD_VAR,
};
use crate::domain::DesiredWorkload;
use crate::error::{ConfigError, Result};

/// One `[[workload.env]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarConfig {
    /// Variable name inside the container.
    pub name: String,
    /// Literal value.
    #[serde(default)]
    pub value: Option<String>,
    /// Name of a variable in the sentinel's own environment to copy the value from.
    #[serde(default)]
    pub from_env: Option<String>,
}

impl EnvVarConfig {
    fn resolve(&self) -> Result<String> {
        match (&self.value, &self.from_env) {
            (Some(value), None) => Ok(value.clone()),
            (None, Some(var)) => std::env::var(var).map_err(|_| {
                ConfigError::InvalidValue {
                    field: "workload.env.from_env",
                    reason: format!("environment variable {var} is not set"),
                }
                .into()
            }),
            _ => Err(ConfigError::InvalidValue {
                field: "workload.env",
                reason: format!("{} must set exactly one of value or from_env", self.name),
            }
            .into()),
        }
    }
}

/// The `[workload]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_env")]
    pub env: Vec<EnvVarConfig>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

fn default_env() -> Vec<EnvVarConfig> {
    vec![EnvVarConfig {
        name: DEFAULT_PASSWORD_VAR.to_string(),
        value: Some(DEFAULT_PASSWORD_PLACEHOLDER.to_string()),
        from_env: None,
    }]
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            namespace: default_namespace(),
            container: default_container(),
            image: default_image(),
            env: default_env(),
        }
    }
}

/// Lowercase alphanumerics and `-`, starting and ending alphanumeric.
fn is_dns_label(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 63
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !value.starts_with('-')
        && !value.ends_with('-')
}

/// Dot-separated DNS labels, at most 253 characters.
fn is_dns_subdomain(value: &str) -> bool {
    value.len() <= 253 && value.split('.').all(is_dns_label)
}

impl WorkloadConfig {
    /// Check names and env entries without touching the process environment.
    pub(crate) fn validate(&self) -> Result<()> {
        if !is_dns_subdomain(&self.name) {
            return Err(ConfigError::InvalidValue {
                field: "workload.name",
                reason: format!("{:?} is not a valid DNS subdomain name", self.name),
            }
            .into());
        }
        if !is_dns_label(&self.namespace) {
            return Err(ConfigError::InvalidValue {
                field: "workload.namespace",
                reason: format!("{:?} is not a valid DNS label", self.namespace),
            }
            .into());
        }
        if !is_dns_label(&self.container) {
            return Err(ConfigError::InvalidValue {
                field: "workload.container",
                reason: format!("{:?} is not a valid DNS label", self.container),
            }
            .into());
        }
        if self.image.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "workload.image",
            }
            .into());
        }
        for var in &self.env {
            if var.name.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "workload.env.name",
                }
                .into());
            }
            if var.value.is_some() == var.from_env.is_some() {
                return Err(ConfigError::InvalidValue {
                    field: "workload.env",
                    reason: format!("{} must set exactly one of value or from_env", var.name),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build the immutable descriptor, resolving `from_env` values.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced environment variable is not set.
    pub fn to_desired(&self) -> Result<DesiredWorkload> {
        let mut desired =
            DesiredWorkload::new(&self.namespace, &self.name, &self.container, &self.image);
        for var in &self.env {
            desired = desired.with_env(&var.name, var.resolve()?);
        }
        Ok(desired)
    }
}
