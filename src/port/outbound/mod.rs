//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the infrastructure the reconciler depends on:
//! the cluster it guards and the sinks its observations go to.

pub mod cluster;
pub mod notifier;
