// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Causal-order validity (failed operations).
//!
//! Predecessor and successor operations are located by first occurrence, in
//! marker order. An interleaving that orders every predecessor before its
//! successor is a correct execution and is removed; what remains is the set
//! of failed operations.

use super::{finish_exclusion, PassOutcome, PrunePass};
use crate::bucket::Buckets;
use crate::event::OpId;
use crate::interleaving::Interleaving;
use crate::marker::MarkerSet;
use crate::signature::{self, Signature};

pub struct CausalOrderPass {
    predecessors: MarkerSet<OpId>,
    successors: MarkerSet<OpId>,
}

impl CausalOrderPass {
    pub fn new(predecessors: MarkerSet<OpId>, successors: MarkerSet<OpId>) -> Self {
        Self {
            predecessors,
            successors,
        }
    }

    fn key(&self, il: &[OpId]) -> (Signature, Signature) {
        (
            signature::first_occurrences(il, &self.predecessors),
            signature::first_occurrences(il, &self.successors),
        )
    }
}

/// An ordering is valid when it has at least one predecessor and:
/// every predecessor is followed by some successor, both position lists are
/// strictly increasing, and `pred[i] < succ[i]` for each positional pair.
pub fn is_valid_ordering(pred: &Signature, succ: &Signature) -> bool {
    let p = pred.positions();
    let s = succ.positions();

    if p.is_empty() {
        return false;
    }

    let each_followed = p.iter().all(|pi| s.iter().any(|si| pi < si));
    let pairs_ordered = p.iter().zip(s).all(|(pi, si)| pi < si);

    each_followed && pred.is_strictly_increasing() && succ.is_strictly_increasing() && pairs_ordered
}

impl PrunePass for CausalOrderPass {
    type Event = OpId;

    fn name(&self) -> &'static str {
        "failed_ops"
    }

    fn prune(&self, universe: &[Interleaving<OpId>]) -> PassOutcome<OpId> {
        let buckets = Buckets::build(universe, |il| self.key(il));

        // The predicate depends only on the key, so one check covers a bucket
        let flagged: Vec<usize> = buckets
            .iter()
            .filter(|((pred, succ), _)| is_valid_ordering(pred, succ))
            .flat_map(|(_, members)| members.iter().copied())
            .collect();

        finish_exclusion(self.name(), universe, buckets.len(), &flagged)
    }
}
