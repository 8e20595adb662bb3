//! Cluster-agnostic domain types: the desired workload and what was observed.

pub mod observation;
pub mod workload;

pub use observation::{classify, decide, Action, ObservedState};
pub use workload::{ContainerSpec, DesiredWorkload, EnvVar, WorkloadObject};
