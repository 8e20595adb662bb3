//! [`ClusterClient`] backed by the Kubernetes API via `kube`.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, PostParams};
use kube::Client;
use tracing::trace;

use super::convert::{cluster_error, object_from_pod, pod_from_object};
use crate::domain::WorkloadObject;
use crate::error::ClusterError;
use crate::port::outbound::cluster::ClusterClient;

/// Workloads are Pods; every call targets a namespaced Pod API.
#[derive(Clone)]
pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn get_by_name(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<WorkloadObject, ClusterError> {
        trace!(namespace, name, "GET pod");
        self.pods(namespace)
            .get(name)
            .await
            .map(object_from_pod)
            .map_err(|e| cluster_error(e, namespace, name))
    }

    async fn create(
        &self,
        namespace: &str,
        workload: &WorkloadObject,
    ) -> Result<WorkloadObject, ClusterError> {
        trace!(namespace, name = %workload.name, "POST pod");
        let pod = pod_from_object(workload);
        self.pods(namespace)
            .create(&PostParams::default(), &pod)
            .await
            .map(object_from_pod)
            .map_err(|e| cluster_error(e, namespace, &workload.name))
    }
}
