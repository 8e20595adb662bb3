//! Outbound adapters (driven side).

pub mod kubernetes;
