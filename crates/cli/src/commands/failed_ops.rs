use crate::config::CausalConfig;
use anyhow::Context;
use prune_kernel::passes::{CausalOrderPass, PrunePass};
use prune_kernel::{OpId, PassStats};
use prune_persistence::{markers, universe};

pub fn run(cfg: &CausalConfig) -> anyhow::Result<PassStats> {
    let interleavings = universe::read_universe::<OpId>(&cfg.interleavings)
        .context("Failed to load interleavings")?;
    let predecessors = markers::read_markers::<OpId>(&cfg.predecessors)
        .context("Failed to load predecessor events")?;
    let successors = markers::read_markers::<OpId>(&cfg.successors)
        .context("Failed to load successor events")?;

    tracing::info!(
        interleavings = interleavings.len(),
        predecessors = predecessors.len(),
        successors = successors.len(),
        "Collecting interleavings that violate causal order"
    );

    let outcome = CausalOrderPass::new(predecessors, successors).prune(&interleavings);
    universe::write_universe(&cfg.output, &outcome.interleavings)
        .with_context(|| format!("Failed to write {}", cfg.output.display()))?;

    println!("Failed operations have been written to {}", cfg.output.display());
    Ok(outcome.stats)
}
