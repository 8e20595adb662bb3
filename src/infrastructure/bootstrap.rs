//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! Obtains a working Kubernetes client and assembles the [`Reconciler`].
//! Failures here are fatal; nothing past this point terminates the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KubeConfig};
use tracing::{info, warn};

use crate::adapter::outbound::kubernetes::KubeClusterClient;
use crate::application::Reconciler;
use crate::error::{BootstrapError, Result};
use crate::infrastructure::config::Config;

/// Where the cluster credentials come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterSource {
    /// A kubeconfig file on disk (running locally).
    Kubeconfig(PathBuf),
    /// The pod's service account (running inside the cluster).
    InCluster,
}

/// `~/.kube/config`, if a home directory is known.
#[must_use]
pub fn default_kubeconfig() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}

/// Pick the credential source.
///
/// The first of `candidates` that is set wins, falling back to
/// [`default_kubeconfig`]. If that file exists it is used; otherwise the
/// in-cluster configuration is.
#[must_use]
pub fn select_source(candidates: &[Option<&Path>]) -> ClusterSource {
    let explicit = candidates.iter().flatten().next().map(|p| p.to_path_buf());
    let path = explicit.clone().or_else(default_kubeconfig);

    match path {
        Some(path) if path.is_file() => ClusterSource::Kubeconfig(path),
        _ => {
            if let Some(missing) = explicit {
                warn!(
                    path = %missing.display(),
                    "Kubeconfig not found, falling back to in-cluster configuration"
                );
            }
            ClusterSource::InCluster
        }
    }
}

/// Build a Kubernetes client from the selected source.
///
/// # Errors
///
/// Returns [`BootstrapError`] if the kubeconfig cannot be loaded, the
/// service account is unavailable, or the client cannot be constructed.
pub async fn connect(source: &ClusterSource) -> std::result::Result<Client, BootstrapError> {
    let config = match source {
        ClusterSource::Kubeconfig(path) => {
            info!(path = %path.display(), "Running locally, using kubeconfig");
            let kubeconfig = Kubeconfig::read_from(path)?;
            KubeConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?
        }
        ClusterSource::InCluster => {
            info!("Running inside cluster, using service account");
            KubeConfig::incluster()?
        }
    };

    Ok(Client::try_from(config)?)
}

/// Assemble a reconciler against the real cluster.
///
/// `kubeconfig` (from the command line) takes precedence over the
/// `[cluster]` section of `config`.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be built or the cluster client
/// cannot be obtained.
pub async fn build_reconciler(config: &Config, kubeconfig: Option<&Path>) -> Result<Reconciler> {
    let desired = config.desired_workload()?;
    let source = select_source(&[kubeconfig, config.cluster.kubeconfig.as_deref()]);
    let client = connect(&source).await?;

    Reconciler::new(
        Arc::new(KubeClusterClient::new(client)),
        desired,
        config.reconciler.interval(),
    )
}
