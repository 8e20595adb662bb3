use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors returned by a cluster client.
///
/// The variants are the structured error kinds the reconciler branches on.
/// `NotFound` is the only kind that leads to healing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("{namespace}/{name} not found: {message}")]
    NotFound {
        namespace: String,
        name: String,
        message: String,
    },

    #[error("{namespace}/{name} already exists")]
    AlreadyExists { namespace: String, name: String },

    #[error("API error {code} ({reason}): {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(String),
}

impl ClusterError {
    /// True when the object (or its namespace) does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when a create collided with an existing object of the same name.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

/// Failures while obtaining a working cluster client at startup.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("failed to load in-cluster configuration: {0}")]
    InCluster(#[from] kube::config::InClusterError),

    #[error("failed to build cluster client: {0}")]
    Client(#[from] kube::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("workload {0} is not present")]
    WorkloadNotPresent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
