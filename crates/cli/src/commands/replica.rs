use crate::config::ReplicaConfig;
use anyhow::Context;
use prune_kernel::passes::{PrunePass, ReplicaPass};
use prune_kernel::{LabeledEvent, PassStats};
use prune_persistence::{markers, universe};

pub fn run(cfg: &ReplicaConfig) -> anyhow::Result<PassStats> {
    let replica = match cfg.replica {
        Some(id) => id,
        None => markers::read_replica_id(std::io::stdin().lock())
            .context("Failed to read replica id from stdin")?,
    };
    let interleavings = universe::read_universe::<LabeledEvent>(&cfg.events)
        .context("Failed to load interleavings")?;

    tracing::info!(replica, interleavings = interleavings.len(), "Pruning replica-specific suffixes");

    let outcome = ReplicaPass::new(replica).prune(&interleavings);
    universe::write_universe(&cfg.output, &outcome.interleavings)
        .with_context(|| format!("Failed to write {}", cfg.output.display()))?;

    println!(
        "Replica {} interleavings have been written to {} ({} of {} kept)",
        replica,
        cfg.output.display(),
        outcome.stats.output,
        outcome.stats.input
    );
    Ok(outcome.stats)
}
