//! Notifier port for reconcile observations.
//!
//! Every decision point of a reconcile cycle produces exactly one [`Event`].
//! Notifiers decide how to surface it; [`LogNotifier`] writes one log line.

use crate::domain::DesiredWorkload;
use crate::error::ClusterError;

/// Events emitted by the reconciler and healer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The workload exists; nothing to do.
    Healthy(WorkloadEvent),
    /// The workload is missing and healing starts.
    Missing(WorkloadEvent),
    /// The observation itself failed; no action this cycle.
    QueryFailed(FailureEvent),
    /// The corrective create call failed.
    HealFailed(FailureEvent),
    /// The corrective create call succeeded.
    Healed(WorkloadEvent),
}

impl Event {
    /// Stable name of the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Healthy(_) => "healthy",
            Self::Missing(_) => "missing",
            Self::QueryFailed(_) => "query_failed",
            Self::HealFailed(_) => "heal_failed",
            Self::Healed(_) => "healed",
        }
    }
}

/// Identity of the workload an event refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadEvent {
    pub namespace: String,
    pub name: String,
}

impl From<&DesiredWorkload> for WorkloadEvent {
    fn from(desired: &DesiredWorkload) -> Self {
        Self {
            namespace: desired.namespace().to_string(),
            name: desired.name().to_string(),
        }
    }
}

/// A failed cluster call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEvent {
    pub namespace: String,
    pub name: String,
    pub error: ClusterError,
}

impl FailureEvent {
    #[must_use]
    pub fn new(desired: &DesiredWorkload, error: ClusterError) -> Self {
        Self {
            namespace: desired.namespace().to_string(),
            name: desired.name().to_string(),
            error,
        }
    }
}

/// Trait for notification handlers.
///
/// Implementations must be thread-safe and return quickly; the reconcile
/// cycle calls them inline.
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Create a registry holding only a [`LogNotifier`].
    #[must_use]
    pub fn logging() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(LogNotifier));
        registry
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that writes one tracing line per event.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::{error, info, warn};
        match event {
            Event::Healthy(e) => {
                info!(namespace = %e.namespace, name = %e.name, "Workload is healthy");
            }
            Event::Missing(e) => {
                warn!(
                    namespace = %e.namespace,
                    name = %e.name,
                    "Workload is missing, initiating recovery"
                );
            }
            Event::QueryFailed(e) => {
                error!(
                    namespace = %e.namespace,
                    name = %e.name,
                    error = %e.error,
                    "Unexpected error while observing workload"
                );
            }
            Event::HealFailed(e) if e.error.is_conflict() => {
                warn!(
                    namespace = %e.namespace,
                    name = %e.name,
                    error = %e.error,
                    "Failed to heal: workload already exists"
                );
            }
            Event::HealFailed(e) => {
                error!(
                    namespace = %e.namespace,
                    name = %e.name,
                    error = %e.error,
                    "Failed to heal"
                );
            }
            Event::Healed(e) => {
                info!(
                    namespace = %e.namespace,
                    name = %e.name,
                    "Workload recreated, recovery complete"
                );
            }
        }
    }
}
