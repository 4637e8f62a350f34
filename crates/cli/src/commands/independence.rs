use crate::config::IndependenceConfig;
use anyhow::Context;
use prune_kernel::passes::{IndependencePass, PrunePass};
use prune_kernel::{LabeledEvent, PassStats};
use prune_persistence::{markers, universe};

pub fn run(cfg: &IndependenceConfig) -> anyhow::Result<PassStats> {
    let interleavings = universe::read_universe::<LabeledEvent>(&cfg.interleavings)
        .context("Failed to load interleavings")?;
    let independent = markers::read_markers::<LabeledEvent>(&cfg.independent_events)
        .context("Failed to load independent events")?;

    tracing::info!(
        interleavings = interleavings.len(),
        markers = independent.len(),
        "Pruning redundant orderings of independent events"
    );

    let outcome = IndependencePass::new(independent).prune(&interleavings);
    universe::write_universe(&cfg.output, &outcome.interleavings)
        .with_context(|| format!("Failed to write {}", cfg.output.display()))?;

    println!(
        "Independent interleavings have been written to {} ({} of {} kept)",
        cfg.output.display(),
        outcome.stats.output,
        outcome.stats.input
    );
    Ok(outcome.stats)
}
