// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Sync-pair grouping.
//!
//! A `sync_req` and an `exec_sync` on the same `(source, target)` channel form
//! a group; externally declared pairs join the same collection. Each
//! interleaving is expanded by placing the two members of a group next to
//! each other, in both orders, at the earlier of their two positions. The
//! pass emits the closure of the universe under that step, originals first,
//! so running it again on its own output changes nothing.

use super::{PassOutcome, PassStats, PrunePass};
use crate::bucket::Buckets;
use crate::config::{DEFAULT_MAX_INTERLEAVINGS, EXEC_SYNC, SYNC_REQ};
use crate::event::ChannelEvent;
use crate::interleaving::Interleaving;
use crate::marker::MarkerSet;
use crate::signature::{self, Signature};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub type Group = (ChannelEvent, ChannelEvent);

pub struct GroupingPass {
    specified: Vec<Group>,
    max_interleavings: usize,
}

impl GroupingPass {
    pub fn new(specified: Vec<Group>) -> Self {
        Self {
            specified,
            max_interleavings: DEFAULT_MAX_INTERLEAVINGS,
        }
    }

    pub fn with_max_interleavings(mut self, max: usize) -> Self {
        self.max_interleavings = max;
        self
    }

    /// Detected sync pairs followed by the declared ones, each unordered pair
    /// kept once.
    pub fn groups(&self, universe: &[Interleaving<ChannelEvent>]) -> Vec<Group> {
        let mut seen: FxHashSet<Group> = FxHashSet::default();
        let mut groups = Vec::new();

        for (a, b) in sync_pairs(universe).into_iter().chain(self.specified.iter().cloned()) {
            if a == b {
                continue;
            }
            let key = if a <= b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            if seen.insert(key) {
                groups.push((a, b));
            }
        }
        groups
    }
}

/// Every `(sync_req, exec_sync)` pair sharing a channel among the distinct
/// events of the universe, in first-seen order.
pub fn sync_pairs(universe: &[Interleaving<ChannelEvent>]) -> Vec<Group> {
    let mut seen = FxHashSet::default();
    let distinct: Vec<&ChannelEvent> = universe
        .iter()
        .flatten()
        .filter(|e| seen.insert(*e))
        .collect();

    let mut pairs = Vec::new();
    for req in distinct.iter().filter(|e| e.kind == SYNC_REQ) {
        for exec in distinct.iter().filter(|e| e.kind == EXEC_SYNC) {
            if req.same_channel(exec) {
                pairs.push(((*req).clone(), (*exec).clone()));
            }
        }
    }
    pairs
}

/// The interleavings obtained by moving `a` and `b` next to each other at the
/// earlier of their first occurrences, once in each relative order.
pub fn placements(il: &[ChannelEvent], a: &ChannelEvent, b: &ChannelEvent) -> Vec<Interleaving<ChannelEvent>> {
    let (Some(i), Some(j)) = (il.iter().position(|e| e == a), il.iter().position(|e| e == b)) else {
        return Vec::new();
    };
    if i == j {
        return Vec::new();
    }

    let at = i.min(j);
    let rest: Vec<&ChannelEvent> = il
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != i && *k != j)
        .map(|(_, e)| e)
        .collect();

    [[a, b], [b, a]]
        .into_iter()
        .map(|pair| {
            rest[..at]
                .iter()
                .copied()
                .chain(pair)
                .chain(rest[at..].iter().copied())
                .cloned()
                .collect()
        })
        .collect()
}

impl PrunePass for GroupingPass {
    type Event = ChannelEvent;

    fn name(&self) -> &'static str {
        "event_group"
    }

    fn prune(&self, universe: &[Interleaving<ChannelEvent>]) -> PassOutcome<ChannelEvent> {
        let groups = self.groups(universe);
        let members: MarkerSet<ChannelEvent> = groups
            .iter()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect();
        let buckets = Buckets::build(universe, |il| signature::index(il, &members));

        // Interleavings holding no group member have nothing to expand
        let inert: FxHashSet<usize> = buckets
            .get(&Signature::default())
            .map(|m| m.iter().copied().collect())
            .unwrap_or_default();

        let mut seen: FxHashSet<Interleaving<ChannelEvent>> = FxHashSet::default();
        let mut out: Vec<Interleaving<ChannelEvent>> = Vec::new();
        let mut truncated = false;

        for (idx, il) in universe.iter().enumerate() {
            if !seen.insert(il.clone()) {
                continue;
            }
            out.push(il.clone());
            if inert.contains(&idx) || truncated {
                continue;
            }

            let mut queue = VecDeque::from([out.len() - 1]);
            'expand: while let Some(current) = queue.pop_front() {
                for (a, b) in &groups {
                    for variant in placements(&out[current], a, b) {
                        if seen.contains(&variant) {
                            continue;
                        }
                        if out.len() >= self.max_interleavings {
                            truncated = true;
                            break 'expand;
                        }
                        seen.insert(variant.clone());
                        out.push(variant);
                        queue.push_back(out.len() - 1);
                    }
                }
            }
        }

        let stats = PassStats {
            pass: self.name(),
            input: universe.len(),
            buckets: buckets.len(),
            flagged: 0,
            output: out.len(),
            groups: Some(groups.len()),
            truncated,
        };
        PassOutcome {
            interleavings: out,
            stats,
        }
    }
}
