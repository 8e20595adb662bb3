//! Infrastructure configuration modules.

pub mod cluster;
pub mod logging;
pub mod settings;
pub mod workload;

pub use settings::Config;
