// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Bucketizer: partitions a universe by signature key.
//!
//! Buckets hold universe indices, not copies. Keys are kept in an ordered map
//! so iteration is deterministic across runs. Every interleaving lands in
//! exactly one bucket.

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Buckets<K: Ord> {
    groups: BTreeMap<K, Vec<usize>>,
    total: usize,
}

impl<K: Ord> Buckets<K> {
    /// Groups `universe` by the key `key_of` computes for each interleaving.
    pub fn build<T, F>(universe: &[T], mut key_of: F) -> Self
    where
        F: FnMut(&T) -> K,
    {
        let mut groups: BTreeMap<K, Vec<usize>> = BTreeMap::new();
        for (i, item) in universe.iter().enumerate() {
            groups.entry(key_of(item)).or_default().push(i);
        }
        Self {
            groups,
            total: universe.len(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of interleavings partitioned.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Buckets in key order; members in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[usize])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn get(&self, key: &K) -> Option<&[usize]> {
        self.groups.get(key).map(|v| v.as_slice())
    }
}
