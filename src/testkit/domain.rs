//! Builders for cluster errors and reconciler fixtures.

use std::sync::Arc;
use std::time::Duration;

use crate::application::Reconciler;
use crate::domain::DesiredWorkload;
use crate::error::ClusterError;
use crate::port::outbound::notifier::NotifierRegistry;
use crate::testkit::cluster::FakeCluster;
use crate::testkit::notifier::RecordingNotifier;

/// A not-found error for `namespace/name`.
pub fn not_found(namespace: &str, name: &str) -> ClusterError {
    ClusterError::NotFound {
        namespace: namespace.to_string(),
        name: name.to_string(),
        message: format!("pods \"{name}\" not found"),
    }
}

/// A 500 Internal Server Error.
pub fn server_error() -> ClusterError {
    ClusterError::Api {
        code: 500,
        reason: "InternalError".to_string(),
        message: "an error on the server has prevented the request from succeeding".to_string(),
    }
}

/// A 403 from missing RBAC permissions.
pub fn forbidden() -> ClusterError {
    ClusterError::Api {
        code: 403,
        reason: "Forbidden".to_string(),
        message: "pods is forbidden".to_string(),
    }
}

/// The API server could not be reached.
pub fn unreachable() -> ClusterError {
    ClusterError::Transport("connection refused".to_string())
}

/// A reconciler over `cluster` with a five second period that records its
/// events instead of logging them.
pub fn recording_reconciler(
    cluster: Arc<FakeCluster>,
    desired: DesiredWorkload,
) -> (Reconciler, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let mut notifiers = NotifierRegistry::new();
    notifiers.register(Box::new(recorder.clone()));

    let reconciler = Reconciler::new(cluster, desired, Duration::from_secs(5))
        .expect("non-zero period")
        .with_notifiers(notifiers);
    (reconciler, recorder)
}
