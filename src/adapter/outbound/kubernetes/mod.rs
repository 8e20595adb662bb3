//! Kubernetes integration.
//!
//! [`KubeClusterClient`] implements the cluster port against a real API
//! server. Pods stand in for workloads; see [`convert`] for the mapping and
//! for how API errors become [`crate::error::ClusterError`] kinds.

pub mod client;
pub mod convert;

pub use client::KubeClusterClient;
