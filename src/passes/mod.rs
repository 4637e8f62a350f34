// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Pruning passes.
//!
//! All passes share one pipeline: index marker events, bucket by signature,
//! evaluate a predicate per bucket, subtract the flagged interleavings.
//! Only the grouping pass grows its input instead of shrinking it.

pub mod causal;
pub mod grouping;
pub mod independence;
pub mod replica;

pub use causal::CausalOrderPass;
pub use grouping::GroupingPass;
pub use independence::IndependencePass;
pub use replica::ReplicaPass;

use crate::event::Record;
use crate::interleaving::Interleaving;
use serde::Serialize;

/// Counters describing one pass run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub pass: &'static str,
    pub input: usize,
    pub buckets: usize,
    /// Interleavings removed from the input. Always zero for grouping.
    pub flagged: usize,
    pub output: usize,
    /// Grouping pass only: number of recorded groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<usize>,
    /// Grouping pass only: expansion hit the output cap.
    pub truncated: bool,
}

#[derive(Debug, Clone)]
pub struct PassOutcome<E> {
    pub interleavings: Vec<Interleaving<E>>,
    pub stats: PassStats,
}

/// A batch pruning pass: a pure function from a universe to its output.
pub trait PrunePass {
    type Event: Record;

    fn name(&self) -> &'static str;

    fn prune(&self, universe: &[Interleaving<Self::Event>]) -> PassOutcome<Self::Event>;
}

/// Shared tail of the exclusion passes: subtract `flagged` and fill in stats.
pub(crate) fn finish_exclusion<E: Record>(
    pass: &'static str,
    universe: &[Interleaving<E>],
    buckets: usize,
    flagged: &[usize],
) -> PassOutcome<E> {
    let interleavings = crate::exclude::exclude(
        universe,
        flagged.iter().map(|&i| universe[i].as_slice()),
    );
    let stats = PassStats {
        pass,
        input: universe.len(),
        buckets,
        flagged: flagged.len(),
        output: interleavings.len(),
        groups: None,
        truncated: false,
    };
    PassOutcome {
        interleavings,
        stats,
    }
}
