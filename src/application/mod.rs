//! Application services (use cases).
//!
//! The reconcile loop and the healing action it triggers. Both talk to the
//! cluster only through [`crate::port::ClusterClient`].

pub mod healer;
pub mod reconciler;

pub use reconciler::{CycleOutcome, CycleReport, Reconciler};
