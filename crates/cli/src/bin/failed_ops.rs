//! Failed-operations pass with the default file names, for harness scripts
//! that invoke each pass as its own program.

use prune_cli::commands::failed_ops;
use prune_cli::config::CausalConfig;
use prune_cli::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();
    failed_ops::run(&CausalConfig::default())?;
    Ok(())
}
