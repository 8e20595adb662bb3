//! Observed state and the reconcile decision.
//!
//! The decision is a pure function of the freshly observed state. Nothing
//! from earlier cycles takes part in it.

use crate::domain::workload::WorkloadObject;
use crate::error::ClusterError;

/// Point-in-time result of querying the cluster for the desired workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedState {
    /// The workload exists.
    Present,
    /// The cluster reported a not-found error for the workload.
    Absent,
    /// The query failed for any other reason; the real state is unknown.
    QueryFailed(ClusterError),
}

impl ObservedState {
    /// Short label used in logs and machine output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::QueryFailed(_) => "query_failed",
        }
    }
}

/// Corrective action chosen for a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the cluster alone.
    None,
    /// Create the workload from the descriptor.
    Heal,
}

/// Classify the result of a get-by-name query.
///
/// Only the structured not-found kind maps to [`ObservedState::Absent`].
#[must_use]
pub fn classify(result: Result<WorkloadObject, ClusterError>) -> ObservedState {
    match result {
        Ok(_) => ObservedState::Present,
        Err(err) if err.is_not_found() => ObservedState::Absent,
        Err(err) => ObservedState::QueryFailed(err),
    }
}

/// Decide what to do about an observation.
///
/// Only [`ObservedState::Absent`] heals; a failed query never does.
#[must_use]
pub const fn decide(state: &ObservedState) -> Action {
    match state {
        ObservedState::Absent => Action::Heal,
        ObservedState::Present | ObservedState::QueryFailed(_) => Action::None,
    }
}
