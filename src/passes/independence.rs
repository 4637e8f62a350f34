// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Independence span exclusion.
//!
//! If every event between the first and last independent event of an
//! interleaving is itself independent, the relative order of that span cannot
//! change observable behaviour and the interleaving is redundant.

use super::{finish_exclusion, PassOutcome, PrunePass};
use crate::bucket::Buckets;
use crate::event::LabeledEvent;
use crate::interleaving::Interleaving;
use crate::marker::MarkerSet;
use crate::signature::{self, Signature};

pub struct IndependencePass {
    independent: MarkerSet<LabeledEvent>,
}

impl IndependencePass {
    pub fn new(independent: MarkerSet<LabeledEvent>) -> Self {
        Self { independent }
    }

    fn span_is_independent(&self, il: &[LabeledEvent], sig: &Signature) -> bool {
        match (sig.first(), sig.last()) {
            (Some(first), Some(last)) => il[first..=last]
                .iter()
                .all(|e| self.independent.contains(e)),
            _ => false,
        }
    }
}

impl PrunePass for IndependencePass {
    type Event = LabeledEvent;

    fn name(&self) -> &'static str {
        "event_independence"
    }

    fn prune(&self, universe: &[Interleaving<LabeledEvent>]) -> PassOutcome<LabeledEvent> {
        let buckets = Buckets::build(universe, |il| signature::index(il, &self.independent));

        let mut flagged = Vec::new();
        for (sig, members) in buckets.iter() {
            if sig.is_empty() {
                continue;
            }
            flagged.extend(
                members
                    .iter()
                    .copied()
                    .filter(|&i| self.span_is_independent(&universe[i], sig)),
            );
        }

        finish_exclusion(self.name(), universe, buckets.len(), &flagged)
    }
}
