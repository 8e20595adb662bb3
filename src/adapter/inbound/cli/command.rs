//! Command-line interface definitions.
//!
//! Defines the CLI structure for the sentinel using `clap`: running the
//! reconcile loop, a one-shot status check, and configuration utilities.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::paths;

/// Keep a single Kubernetes workload alive by recreating it when it disappears
#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(version, about)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the sentinel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the reconcile loop until the process is terminated
    Run(RunArgs),

    /// Observe the workload once without healing it
    Status(StatusArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `sentinel config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Kubeconfig to use when running outside the cluster.
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Seconds between reconcile cycles (overrides config).
    #[arg(long)]
    pub interval: Option<u64>,

    /// Log level (overrides config and is itself overridden by RUST_LOG).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Kubeconfig to use when running outside the cluster.
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,
}
