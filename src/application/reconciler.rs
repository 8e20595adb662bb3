//! Reconcile loop for a single named workload.
//!
//! Each cycle observes the workload, decides with [`decide`], and performs at
//! most one corrective action. Cycles share nothing but the read-only
//! [`DesiredWorkload`]; there are no retry counters or memory of previous
//! outcomes.
//!
//! # Cycle
//!
//! ```text
//! get_by_name ──> classify ──> decide ──┬── Present      -> Healthy
//!                                       ├── Absent       -> heal()
//!                                       └── QueryFailed  -> no action
//! sleep(period)
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::application::healer;
use crate::domain::{classify, decide, Action, DesiredWorkload, ObservedState};
use crate::error::{ClusterError, ConfigError, Result};
use crate::port::outbound::cluster::ClusterClient;
use crate::port::outbound::notifier::{Event, FailureEvent, NotifierRegistry, WorkloadEvent};

/// What a cycle ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The workload was present.
    Healthy,
    /// The workload was absent and was created.
    Healed,
    /// The workload was absent and the create call failed.
    HealFailed(ClusterError),
    /// The observation failed; nothing was done.
    QueryFailed(ClusterError),
}

impl CycleOutcome {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Healed => "healed",
            Self::HealFailed(_) => "heal_failed",
            Self::QueryFailed(_) => "query_failed",
        }
    }
}

/// Result of one reconcile cycle. Not persisted.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// When the cycle started; the only identity a cycle has.
    pub started_at: DateTime<Utc>,
    /// State observed at the start of the cycle.
    pub observed: ObservedState,
    /// Action chosen for the observation.
    pub action: Action,
    /// What the action produced.
    pub outcome: CycleOutcome,
}

/// Keeps a single workload alive by polling on a fixed period.
pub struct Reconciler {
    client: Arc<dyn ClusterClient>,
    desired: DesiredWorkload,
    period: Duration,
    notifiers: NotifierRegistry,
}

impl Reconciler {
    /// Create a reconciler that logs its observations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `period` is zero.
    pub fn new(
        client: Arc<dyn ClusterClient>,
        desired: DesiredWorkload,
        period: Duration,
    ) -> Result<Self> {
        if period.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(Self {
            client,
            desired,
            period,
            notifiers: NotifierRegistry::logging(),
        })
    }

    /// Replace the notifiers observations are sent to.
    #[must_use]
    pub fn with_notifiers(mut self, notifiers: NotifierRegistry) -> Self {
        self.notifiers = notifiers;
        self
    }

    #[must_use]
    pub fn desired(&self) -> &DesiredWorkload {
        &self.desired
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Query the cluster once and classify the answer.
    ///
    /// Emits no events and never heals.
    pub async fn observe(&self) -> ObservedState {
        let result = self
            .client
            .get_by_name(self.desired.namespace(), self.desired.name())
            .await;
        classify(result)
    }

    /// Run a single reconcile cycle to completion.
    pub async fn run_cycle(&self) -> CycleReport {
        let started_at = Utc::now();
        let observed = self.observe().await;
        let action = decide(&observed);

        let outcome = match &observed {
            ObservedState::Present => {
                self.notifiers
                    .notify_all(Event::Healthy(WorkloadEvent::from(&self.desired)));
                CycleOutcome::Healthy
            }
            ObservedState::Absent => {
                debug_assert_eq!(action, Action::Heal);
                self.notifiers
                    .notify_all(Event::Missing(WorkloadEvent::from(&self.desired)));
                match healer::heal(self.client.as_ref(), &self.desired, &self.notifiers).await {
                    Ok(_) => CycleOutcome::Healed,
                    Err(err) => CycleOutcome::HealFailed(err),
                }
            }
            ObservedState::QueryFailed(err) => {
                self.notifiers.notify_all(Event::QueryFailed(FailureEvent::new(
                    &self.desired,
                    err.clone(),
                )));
                CycleOutcome::QueryFailed(err.clone())
            }
        };

        debug!(
            started_at = %started_at,
            observed = observed.label(),
            outcome = outcome.label(),
            "Reconcile cycle finished"
        );

        CycleReport {
            started_at,
            observed,
            action,
            outcome,
        }
    }

    /// Run reconcile cycles forever.
    ///
    /// The sleep follows the cycle body, so cycle N+1 starts one period after
    /// cycle N finished. A hung cluster call stalls the loop; there is no
    /// timeout beyond the client's own.
    pub async fn run_forever(&self) {
        info!(
            namespace = self.desired.namespace(),
            name = self.desired.name(),
            interval_secs = self.period.as_secs_f64(),
            "Sentinel started, monitoring workload"
        );

        loop {
            self.run_cycle().await;
            sleep(self.period).await;
        }
    }
}
