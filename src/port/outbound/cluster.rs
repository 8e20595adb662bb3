//! Cluster port.
//!
//! The capability the reconciler needs from a cluster: look a workload up by
//! name and create one. How the client was obtained (kubeconfig, service
//! account, in-memory fake) is not the reconciler's concern.

use async_trait::async_trait;

use crate::domain::WorkloadObject;
use crate::error::ClusterError;

/// Read and create access to workloads in a cluster.
///
/// Implementations must report a missing object as
/// [`ClusterError::NotFound`] and nothing else as that kind.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Fetch a workload by namespace and name.
    async fn get_by_name(&self, namespace: &str, name: &str)
        -> Result<WorkloadObject, ClusterError>;

    /// Create a workload in the given namespace.
    ///
    /// A name collision is reported as [`ClusterError::AlreadyExists`].
    async fn create(
        &self,
        namespace: &str,
        workload: &WorkloadObject,
    ) -> Result<WorkloadObject, ClusterError>;
}
