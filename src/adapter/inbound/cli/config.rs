//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Load the configuration at `path`.
///
/// A missing file at the default location yields the built-in defaults; any
/// other missing file is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() && paths::is_default_config(path) {
        let config = Config::default();
        config.validate()?;
        return Ok(config);
    }
    Config::load(path)
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let workload = &config.workload;

    if output::is_json() {
        let env: Vec<_> = workload
            .env
            .iter()
            .map(|var| {
                json!({
                    "name": var.name,
                    "source": if var.from_env.is_some() { "env" } else { "literal" },
                    "from_env": var.from_env,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "config.show",
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
            "reconciler": { "interval_secs": config.reconciler.interval_secs },
            "workload": {
                "namespace": workload.namespace,
                "name": workload.name,
                "container": workload.container,
                "image": workload.image,
                "env": env,
            },
            "cluster": {
                "kubeconfig": config.cluster.kubeconfig.as_ref().map(|p| p.display().to_string()),
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Config", path.display());
    output::field("Interval", format!("{}s", config.reconciler.interval_secs));
    output::field("Log level", &config.logging.level);

    output::section("Workload");
    output::field("Namespace", &workload.namespace);
    output::field("Name", &workload.name);
    output::field("Container", &workload.container);
    output::field("Image", &workload.image);
    for var in &workload.env {
        let source = match &var.from_env {
            Some(from) => format!("from ${from}"),
            None => "(literal, hidden)".to_string(),
        };
        output::field(&var.name, source);
    }

    output::section("Cluster");
    match &config.cluster.kubeconfig {
        Some(path) => output::field("Kubeconfig", path.display()),
        None => output::field("Kubeconfig", "~/.kube/config, else in-cluster"),
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    // Resolves from_env entries too, so a missing secret fails validation.
    let desired = config.desired_workload()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "workload": desired.to_string(),
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Workload", desired);
    Ok(())
}
