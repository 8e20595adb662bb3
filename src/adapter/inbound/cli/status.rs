//! Handler for the `status` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::StatusArgs;
use crate::adapter::inbound::cli::config::load_config;
use crate::adapter::inbound::cli::output;
use crate::domain::{DesiredWorkload, ObservedState};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;

/// Observe the workload once. Never heals.
///
/// Succeeds only when the workload is present.
pub async fn execute(args: &StatusArgs) -> Result<()> {
    let mut config = load_config(&args.config)?;
    config.logging.apply_overrides(None, output::is_json());
    config.init_logging();

    let reconciler = bootstrap::build_reconciler(&config, args.kubeconfig.as_deref()).await?;
    let desired = reconciler.desired();
    let observed = reconciler.observe().await;

    if output::is_json() {
        let detail = match &observed {
            ObservedState::QueryFailed(err) => Some(err.to_string()),
            _ => None,
        };
        output::json_output(json!({
            "command": "status",
            "workload": desired.to_string(),
            "state": observed.label(),
            "error": detail,
        }));
    } else {
        output::section("Workload");
        output::field("Namespace", desired.namespace());
        output::field("Name", desired.name());
        match &observed {
            ObservedState::Present => output::success("Present"),
            ObservedState::Absent => output::warning("Absent"),
            // The returned error is printed by the caller.
            ObservedState::QueryFailed(_) => output::field("State", observed.label()),
        }
    }

    exit_status(desired, observed)
}

fn exit_status(desired: &DesiredWorkload, observed: ObservedState) -> Result<()> {
    match observed {
        ObservedState::Present => Ok(()),
        ObservedState::Absent => Err(Error::WorkloadNotPresent(desired.to_string())),
        ObservedState::QueryFailed(err) => Err(err.into()),
    }
}
