use prune_cli::commands::independence;
use prune_cli::config::IndependenceConfig;
use prune_cli::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();
    independence::run(&IndependenceConfig::default())?;
    Ok(())
}
