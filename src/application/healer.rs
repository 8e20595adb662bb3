//! Healing: materialize the desired workload in the cluster.

use tracing::debug;

use crate::domain::{DesiredWorkload, WorkloadObject};
use crate::error::ClusterError;
use crate::port::outbound::cluster::ClusterClient;
use crate::port::outbound::notifier::{Event, FailureEvent, NotifierRegistry, WorkloadEvent};

/// Create the workload described by `desired`.
///
/// The creation request is built from the descriptor and nothing else. The
/// outcome is reported through `notifiers` and returned; the caller takes no
/// further action on failure, since the next cycle will observe the workload
/// as absent again.
///
/// There is no idempotency guard. If an earlier create is still propagating,
/// the cluster rejects the duplicate with [`ClusterError::AlreadyExists`],
/// which is reported like any other failure.
pub async fn heal(
    client: &dyn ClusterClient,
    desired: &DesiredWorkload,
    notifiers: &NotifierRegistry,
) -> Result<WorkloadObject, ClusterError> {
    let request = desired.to_object();
    debug!(
        namespace = desired.namespace(),
        name = desired.name(),
        image = desired.image(),
        "Creating workload"
    );

    match client.create(desired.namespace(), &request).await {
        Ok(created) => {
            notifiers.notify_all(Event::Healed(WorkloadEvent::from(desired)));
            Ok(created)
        }
        Err(err) => {
            notifiers.notify_all(Event::HealFailed(FailureEvent::new(desired, err.clone())));
            Err(err)
        }
    }
}
