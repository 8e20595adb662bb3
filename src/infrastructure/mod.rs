//! Infrastructure layer.
//!
//! Technical concerns that support the reconciler without containing any of
//! its logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Cluster client discovery and runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;

pub use config::Config;
