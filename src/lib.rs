//! Sentinel - a self-healing controller for a single Kubernetes workload.
//!
//! The sentinel polls the cluster for one named workload and recreates it from
//! a fixed descriptor whenever the cluster reports it missing.
//!
//! # Architecture
//!
//! The crate is laid out hexagonally:
//!
//! - [`domain`] - The desired workload, observed state, and the pure
//!   `classify`/`decide` functions
//! - [`port`] - The `ClusterClient` and `Notifier` traits
//! - [`application`] - The `Reconciler` loop and the `heal` action
//! - [`adapter`] - A `kube`-backed cluster client and the CLI
//! - [`infrastructure`] - Configuration, logging, and client bootstrap
//! - [`error`] - Error types for the crate
//! - `testkit` - In-memory fakes (requires the `testkit` feature)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use sentinel::adapter::outbound::kubernetes::KubeClusterClient;
//! use sentinel::application::Reconciler;
//! use sentinel::domain::DesiredWorkload;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = kube::Client::try_default().await?;
//! let reconciler = Reconciler::new(
//!     Arc::new(KubeClusterClient::new(client)),
//!     DesiredWorkload::default(),
//!     Duration::from_secs(5),
//! )?;
//! reconciler.run_forever().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
