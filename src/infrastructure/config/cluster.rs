//! Cluster connection and reconcile timing configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The `[cluster]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Kubeconfig file to use when running outside the cluster.
    ///
    /// Defaults to `~/.kube/config`. When the file does not exist the
    /// in-cluster service account is used instead.
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,
}

/// The `[reconciler]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Seconds to sleep after each cycle.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_interval_secs() -> u64 {
    5
}

impl ReconcilerConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}
