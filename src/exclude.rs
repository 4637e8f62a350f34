// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Exclusion engine.

use crate::event::Record;
use crate::interleaving::Interleaving;
use rustc_hash::FxHashSet;

/// Stable set difference `universe - to_remove`.
///
/// An interleaving is removed iff its whole event sequence equals some member
/// of `to_remove`. Duplicates and absent entries in `to_remove` are no-ops.
/// Retained interleavings keep their universe order.
pub fn exclude<'a, E, I>(universe: &[Interleaving<E>], to_remove: I) -> Vec<Interleaving<E>>
where
    E: Record + 'a,
    I: IntoIterator<Item = &'a [E]>,
{
    let removed: FxHashSet<&[E]> = to_remove.into_iter().collect();
    if removed.is_empty() {
        return universe.to_vec();
    }

    universe
        .iter()
        .filter(|il| !removed.contains(il.as_slice()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::OpId;

    fn il(ids: &[i64]) -> Vec<OpId> {
        ids.iter().map(|&i| OpId(i)).collect()
    }

    #[test]
    fn test_exclude_preserves_order() {
        let universe = vec![il(&[1, 2]), il(&[2, 1]), il(&[3]), il(&[1])];
        let remove = [il(&[2, 1])];

        let pruned = exclude(&universe, remove.iter().map(|v| v.as_slice()));
        assert_eq!(pruned, vec![il(&[1, 2]), il(&[3]), il(&[1])]);
    }

    #[test]
    fn test_exclude_tolerates_duplicates_and_strangers() {
        let universe = vec![il(&[1, 2]), il(&[3])];
        let remove = [il(&[3]), il(&[3]), il(&[9, 9])];

        let pruned = exclude(&universe, remove.iter().map(|v| v.as_slice()));
        assert_eq!(pruned, vec![il(&[1, 2])]);
    }

    #[test]
    fn test_exclude_requires_whole_sequence_match() {
        // A prefix is not a match
        let universe = vec![il(&[1, 2, 3])];
        let remove = [il(&[1, 2])];

        let pruned = exclude(&universe, remove.iter().map(|v| v.as_slice()));
        assert_eq!(pruned, universe);
    }
}
