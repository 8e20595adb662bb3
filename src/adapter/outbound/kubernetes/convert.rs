//! Conversions between `k8s-openapi` Pods and domain workload objects, and
//! from `kube` errors to [`ClusterError`] kinds.

use k8s_openapi::api::core::v1::{Container, EnvVar as PodEnvVar, Pod, PodSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::ErrorResponse;

use crate::domain::{ContainerSpec, EnvVar, WorkloadObject};
use crate::error::ClusterError;

/// Build the Pod manifest for a workload creation request.
#[must_use]
pub fn pod_from_object(object: &WorkloadObject) -> Pod {
    let containers = object
        .containers
        .iter()
        .map(|container| Container {
            name: container.name.clone(),
            image: Some(container.image.clone()),
            env: Some(
                container
                    .env
                    .iter()
                    .map(|var| PodEnvVar {
                        name: var.name.clone(),
                        value: Some(var.value.clone()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        })
        .collect();

    Pod {
        metadata: ObjectMeta {
            name: Some(object.name.clone()),
            namespace: Some(object.namespace.clone()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers,
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Read a Pod returned by the API server back into a workload object.
///
/// Env vars sourced from secrets or config maps have no literal value and
/// are read back with an empty one.
#[must_use]
pub fn object_from_pod(pod: Pod) -> WorkloadObject {
    let containers = pod
        .spec
        .map(|spec| {
            spec.containers
                .into_iter()
                .map(|container| ContainerSpec {
                    name: container.name,
                    image: container.image.unwrap_or_default(),
                    env: container
                        .env
                        .unwrap_or_default()
                        .into_iter()
                        .map(|var| EnvVar::new(var.name, var.value.unwrap_or_default()))
                        .collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    WorkloadObject {
        name: pod.metadata.name.unwrap_or_default(),
        namespace: pod.metadata.namespace.unwrap_or_default(),
        containers,
    }
}

/// Map a `kube` error onto the structured cluster error kinds.
///
/// The kind is decided by the HTTP status code of the API response, never by
/// the message text. Anything that is not an API response (connection, TLS,
/// serialization) is a transport error.
#[must_use]
pub fn cluster_error(err: kube::Error, namespace: &str, name: &str) -> ClusterError {
    match err {
        kube::Error::Api(response) => api_error(response, namespace, name),
        other => ClusterError::Transport(other.to_string()),
    }
}

fn api_error(response: ErrorResponse, namespace: &str, name: &str) -> ClusterError {
    match response.code {
        404 => ClusterError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
            message: response.message,
        },
        409 => ClusterError::AlreadyExists {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        code => ClusterError::Api {
            code,
            reason: response.reason,
            message: response.message,
        },
    }
}
