//! Workload descriptors.
//!
//! [`DesiredWorkload`] is the single source of truth for what should exist in
//! the cluster. [`WorkloadObject`] is the client-level shape of a workload,
//! used both for objects read back from the cluster and for creation requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default namespace of the guarded workload.
pub const DEFAULT_NAMESPACE: &str = "default";
/// Default name of the guarded workload.
pub const DEFAULT_NAME: &str = "my-postgres";
/// Default container name inside the workload.
pub const DEFAULT_CONTAINER: &str = "postgres";
/// Default container image.
pub const DEFAULT_IMAGE: &str = "postgres:13";
/// Name of the single environment variable carried by the default workload.
pub const DEFAULT_PASSWORD_VAR: &str = "POSTGRES_PASSWORD";
/// Placeholder value for [`DEFAULT_PASSWORD_VAR`].
pub const DEFAULT_PASSWORD_PLACEHOLDER: &str = "secret";

/// A single `NAME=value` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A container inside a [`WorkloadObject`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub env: Vec<EnvVar>,
}

/// Client-level representation of a workload in the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadObject {
    pub name: String,
    pub namespace: String,
    pub containers: Vec<ContainerSpec>,
}

/// Immutable descriptor of the workload that must exist.
///
/// Constructed once at startup and shared read-only by every reconcile cycle.
/// Fields are private so the descriptor cannot be altered after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesiredWorkload {
    name: String,
    namespace: String,
    container: String,
    image: String,
    env: Vec<EnvVar>,
}

impl DesiredWorkload {
    /// Create a descriptor with no environment variables.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        container: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            container: container.into(),
            image: image.into(),
            env: Vec::new(),
        }
    }

    /// Add an environment variable to the descriptor.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push(EnvVar::new(name, value));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn env(&self) -> &[EnvVar] {
        &self.env
    }

    /// Build the creation request for this descriptor.
    ///
    /// The request carries a single container and nothing that is not in the
    /// descriptor.
    #[must_use]
    pub fn to_object(&self) -> WorkloadObject {
        WorkloadObject {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            containers: vec![ContainerSpec {
                name: self.container.clone(),
                image: self.image.clone(),
                env: self.env.clone(),
            }],
        }
    }
}

impl Default for DesiredWorkload {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAMESPACE,
            DEFAULT_NAME,
            DEFAULT_CONTAINER,
            DEFAULT_IMAGE,
        )
        .with_env(DEFAULT_PASSWORD_VAR, DEFAULT_PASSWORD_PLACEHOLDER)
    }
}

impl fmt::Display for DesiredWorkload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
