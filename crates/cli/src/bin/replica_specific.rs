//! Reads the replica id from stdin, prunes events.dl into RI.dl.

use prune_cli::commands::replica;
use prune_cli::config::ReplicaConfig;
use prune_cli::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();
    replica::run(&ReplicaConfig::default())?;
    Ok(())
}
