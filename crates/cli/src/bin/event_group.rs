//! Runs the grouping pass on events.dl and groups.dl in the working directory.

use prune_cli::commands::group;
use prune_cli::config::GroupConfig;
use prune_cli::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();
    group::run(&GroupConfig::default())?;
    Ok(())
}
