// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Marker sets: externally supplied events of interest for one pass.

use crate::event::Record;
use rustc_hash::FxHashSet;

/// Read-only marker events, kept both in file order and hashed.
#[derive(Debug, Clone)]
pub struct MarkerSet<E: Record> {
    ordered: Vec<E>,
    index: FxHashSet<E>,
}

impl<E: Record> MarkerSet<E> {
    pub fn new(events: Vec<E>) -> Self {
        let index = events.iter().cloned().collect();
        Self {
            ordered: events,
            index,
        }
    }

    pub fn contains(&self, event: &E) -> bool {
        self.index.contains(event)
    }

    /// Markers in the order they were supplied, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<E: Record> Default for MarkerSet<E> {
    fn default() -> Self {
        Self {
            ordered: Vec::new(),
            index: FxHashSet::default(),
        }
    }
}

impl<E: Record> FromIterator<E> for MarkerSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
