// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Separate-chaining hash table: each bucket is a
//! `Vec` of entries; collisions simply grow the bucket rather than
//! probing elsewhere. Buckets double and every entry rehashes once the
//! load factor crosses [`MAX_LOAD_FACTOR`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const INITIAL_BUCKETS: usize = 16;
const MAX_LOAD_FACTOR: f64 = 0.75;

/// A key/value map backed by separate chaining.
pub struct HashChain<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: Hash + Eq, V> HashChain<K, V> {
    pub fn new() -> Self {
        Self {
            buckets: (0..INITIAL_BUCKETS).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    fn hash_of(key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    fn bucket_index(&self, key: &K) -> usize {
        (Self::hash_of(key) as usize) % self.buckets.len()
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn grow_if_needed(&mut self) {
        if self.load_factor() <= MAX_LOAD_FACTOR {
            return;
        }
        let mut new_buckets: Vec<Vec<(K, V)>> =
            (0..self.buckets.len() * 2).map(|_| Vec::new()).collect();
        for bucket in self.buckets.drain(..) {
            for (k, v) in bucket {
                let idx = (Self::hash_of(&k) as usize) % new_buckets.len();
                new_buckets[idx].push((k, v));
            }
        }
        self.buckets = new_buckets;
    }

    /// Insert `key -> value`, returning the previous value if `key` was
    /// already present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        if let Some(slot) = self.buckets[idx].iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.buckets[idx].push((key, value));
        self.len += 1;
        self.grow_if_needed();
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn delete(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|(k, _)| k == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(pos).1)
    }

    /// Longest bucket chain, the usual diagnostic for hash quality under
    /// a fixed load factor.
    pub fn max_bucket_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }
}

impl<K: Hash + Eq, V> Default for HashChain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
