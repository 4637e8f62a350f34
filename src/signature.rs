// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Signature indexer.
//!
//! A signature is the ordered list of positions at which marker events occur
//! inside one interleaving. Interleavings with identical signatures share a
//! bucket. The empty signature is a valid key.

use crate::event::Record;
use crate::marker::MarkerSet;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Signature(pub Vec<usize>);

impl Signature {
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// True when every position is greater than the one before it.
    pub fn is_strictly_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] < w[1])
    }
}

/// Ascending positions whose event belongs to `markers`.
pub fn index<E: Record>(interleaving: &[E], markers: &MarkerSet<E>) -> Signature {
    positions_where(interleaving, |e| markers.contains(e))
}

/// Ascending positions whose event satisfies `pred`.
pub fn positions_where<E, F>(interleaving: &[E], mut pred: F) -> Signature
where
    F: FnMut(&E) -> bool,
{
    Signature(
        interleaving
            .iter()
            .enumerate()
            .filter(|(_, e)| pred(e))
            .map(|(i, _)| i)
            .collect(),
    )
}

/// For each marker in supplied order, the position of its first occurrence.
/// Markers that never occur contribute nothing, so the result is positional
/// in marker order rather than sorted.
pub fn first_occurrences<E: Record>(interleaving: &[E], markers: &MarkerSet<E>) -> Signature {
    Signature(
        markers
            .iter()
            .filter_map(|m| interleaving.iter().position(|e| e == m))
            .collect(),
    )
}
