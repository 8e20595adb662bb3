//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where adapters plug in external systems.
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │       Application       │
//!                │  Reconciler + Healer    │
//!                └───────────┬─────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!        ┌───────────┐              ┌────────────┐
//!        │  Cluster  │              │  Notifier  │
//!        │  Adapter  │              │  Adapter   │
//!        └───────────┘              └────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ClusterClient`] - get-by-name and create against a cluster
//! - [`Notifier`] - one event per reconcile decision point

pub mod outbound;

pub use outbound::cluster::ClusterClient;
pub use outbound::notifier::{Event, FailureEvent, LogNotifier, Notifier, NotifierRegistry};
pub use outbound::notifier::{NullNotifier, WorkloadEvent};
