//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::config::load_config;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute the run command.
///
/// Returns only on a startup failure or when the process is interrupted.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = load_config(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;

    config.init_logging();

    let reconciler = bootstrap::build_reconciler(&config, args.kubeconfig.as_deref()).await?;

    if !output::is_quiet() && !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("Workload", reconciler.desired());
        output::field("Image", reconciler.desired().image());
        output::field("Interval", format!("{}s", reconciler.period().as_secs()));
    }

    tokio::select! {
        () = reconciler.run_forever() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("sentinel stopped");
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(interval) = args.interval {
        config.reconciler.interval_secs = interval;
    }
    config
        .logging
        .apply_overrides(args.log_level.as_deref(), args.json_logs || output::is_json());
}
