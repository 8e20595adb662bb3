//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`cluster`] - [`FakeCluster`](cluster::FakeCluster), an in-memory
//!   [`ClusterClient`](crate::port::ClusterClient) with scripted failures.
//! - [`notifier`] - [`RecordingNotifier`](notifier::RecordingNotifier).
//! - [`domain`] - Cluster error builders and reconciler fixtures.

pub mod cluster;
pub mod domain;
pub mod notifier;
