use crate::config::GroupConfig;
use anyhow::Context;
use prune_kernel::passes::{GroupingPass, PrunePass};
use prune_kernel::{ChannelEvent, PassStats};
use prune_persistence::{markers, universe};

pub fn run(cfg: &GroupConfig) -> anyhow::Result<PassStats> {
    let interleavings = universe::read_universe::<ChannelEvent>(&cfg.events)
        .context("Failed to load events")?;
    let declared = markers::read_groups(&cfg.groups)
        .context("Failed to load declared groups")?;

    tracing::info!(
        interleavings = interleavings.len(),
        declared = declared.len(),
        "Expanding sync-pair groups"
    );

    let outcome = GroupingPass::new(declared)
        .with_max_interleavings(cfg.max_interleavings)
        .prune(&interleavings);
    if outcome.stats.truncated {
        tracing::warn!(
            limit = cfg.max_interleavings,
            "Expansion stopped at the interleaving limit; output is not a fixed point"
        );
    }

    universe::write_universe(&cfg.output, &outcome.interleavings)
        .with_context(|| format!("Failed to write {}", cfg.output.display()))?;

    println!(
        "Grouped interleavings have been written to {} ({} from {} inputs)",
        cfg.output.display(),
        outcome.stats.output,
        outcome.stats.input
    );
    Ok(outcome.stats)
}
