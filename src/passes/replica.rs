// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Replica-suffix containment.
//!
//! Interleavings are bucketed by where the target replica's events sit. The
//! first member of each bucket is its representative; the events it runs
//! after the replica acts form a tail group. Any other interleaving that
//! contains a whole tail group, in any order, explores nothing new for that
//! replica and is removed. Representatives of buckets where the replica acts
//! are never removed, which keeps the pass idempotent.

use super::{finish_exclusion, PassOutcome, PrunePass};
use crate::bucket::Buckets;
use crate::event::LabeledEvent;
use crate::interleaving::Interleaving;
use crate::signature::{self, Signature};
use rustc_hash::FxHashSet;

pub struct ReplicaPass {
    replica: i64,
}

impl ReplicaPass {
    pub fn new(replica: i64) -> Self {
        Self { replica }
    }

    pub fn replica(&self) -> i64 {
        self.replica
    }
}

/// Union of the events after every position in `sig`, first appearance order.
pub fn tail_group(il: &[LabeledEvent], sig: &Signature) -> Vec<LabeledEvent> {
    let mut seen = FxHashSet::default();
    let mut tail = Vec::new();
    for &pos in sig.positions() {
        for event in &il[pos + 1..] {
            if seen.insert(event) {
                tail.push(event.clone());
            }
        }
    }
    tail
}

/// `il` holds every event of `group`, positions ignored.
pub fn contains_all(il: &[LabeledEvent], group: &[LabeledEvent]) -> bool {
    let present: FxHashSet<&LabeledEvent> = il.iter().collect();
    group.iter().all(|e| present.contains(e))
}

impl PrunePass for ReplicaPass {
    type Event = LabeledEvent;

    fn name(&self) -> &'static str {
        "replica_specific"
    }

    fn prune(&self, universe: &[Interleaving<LabeledEvent>]) -> PassOutcome<LabeledEvent> {
        let buckets = Buckets::build(universe, |il| {
            signature::positions_where(il, |e| e.source == self.replica)
        });

        let mut representatives: FxHashSet<&[LabeledEvent]> = FxHashSet::default();
        let mut groups: Vec<Vec<LabeledEvent>> = Vec::new();
        for (sig, members) in buckets.iter() {
            if sig.is_empty() {
                continue;
            }
            let rep = &universe[members[0]];
            representatives.insert(rep.as_slice());
            let tail = tail_group(rep, sig);
            if !tail.is_empty() {
                groups.push(tail);
            }
        }

        let flagged: Vec<usize> = universe
            .iter()
            .enumerate()
            .filter(|(_, il)| !representatives.contains(il.as_slice()))
            .filter(|(_, il)| groups.iter().any(|g| contains_all(il, g)))
            .map(|(i, _)| i)
            .collect();

        finish_exclusion(self.name(), universe, buckets.len(), &flagged)
    }
}
