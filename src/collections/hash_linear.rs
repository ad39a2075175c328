// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Linear-probing hash table.
//!
//! Every slot is one of [`Slot::Empty`], [`Slot::Occupied`], or
//! [`Slot::Tombstone`] rather than relying on an all-zero-bytes sentinel
//! to mean "empty" — a generic `K` has no such sentinel representation,
//! so the state has to be carried explicitly. A tombstone keeps probe
//! chains intact after a deletion; lookups skip over it but insertion is
//! free to reuse it.
//!
//! Capacity is fixed at construction and never resized: once every slot
//! is occupied, `put` rejects further new keys with
//! [`LatticeError::CapacityExceeded`] rather than growing the table.

use crate::error::{LatticeError, LatticeResult};

const INITIAL_CAPACITY: usize = 16;

enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Tombstone,
}

/// A key/value map backed by linear probing over a fixed-size table.
pub struct HashLinear<K, V> {
    slots: Vec<Slot<K, V>>,
    len: usize,
    tombstones: usize,
}

impl<K: std::hash::Hash + Eq, V> HashLinear<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Build a table with a fixed `capacity`, never grown automatically.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "HashLinear capacity must be at least 1");
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            len: 0,
            tombstones: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn hash_of(key: &K) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher;
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Probe from `key`'s home slot, returning the first index that is
    /// either occupied by an equal key or the first empty/tombstone slot
    /// a matching insert should use. Returns `None` only when the table
    /// is entirely full of other keys and `key` is absent — the only
    /// caller that can hit this, `put`, checks capacity before probing.
    fn probe(&self, key: &K) -> Option<usize> {
        let cap = self.slots.len();
        let start = (Self::hash_of(key) as usize) % cap;
        let mut first_tombstone: Option<usize> = None;
        for step in 0..cap {
            let idx = (start + step) % cap;
            match &self.slots[idx] {
                Slot::Empty => return Some(first_tombstone.unwrap_or(idx)),
                Slot::Occupied(k, _) if k == key => return Some(idx),
                Slot::Occupied(_, _) => continue,
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(idx);
                    }
                }
            }
        }
        first_tombstone
    }

    /// Insert `key -> value`, returning the previous value if `key` was
    /// already present. Fails with [`LatticeError::CapacityExceeded`] if
    /// `key` is new and every slot is already occupied.
    pub fn put(&mut self, key: K, value: V) -> LatticeResult<Option<V>> {
        if !self.contains_key(&key) && self.len >= self.slots.len() {
            return Err(LatticeError::CapacityExceeded {
                capacity: self.slots.len(),
            });
        }
        let idx = self
            .probe(&key)
            .expect("put guards against a full table before probing");
        let previous = match std::mem::replace(&mut self.slots[idx], Slot::Empty) {
            Slot::Occupied(_, old_v) => Some(old_v),
            Slot::Empty => {
                self.len += 1;
                None
            }
            Slot::Tombstone => {
                self.len += 1;
                self.tombstones -= 1;
                None
            }
        };
        self.slots[idx] = Slot::Occupied(key, value);
        Ok(previous)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.probe(key)?;
        match &self.slots[idx] {
            Slot::Occupied(k, v) if k == key => Some(v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.probe(key)?;
        match &mut self.slots[idx] {
            Slot::Occupied(k, v) if k == key => Some(v),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn delete(&mut self, key: &K) -> Option<V> {
        let idx = self.probe(key)?;
        match &self.slots[idx] {
            Slot::Occupied(k, _) if k == key => {
                let removed = std::mem::replace(&mut self.slots[idx], Slot::Tombstone);
                self.len -= 1;
                self.tombstones += 1;
                match removed {
                    Slot::Occupied(_, v) => Some(v),
                    _ => unreachable!(),
                }
            }
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        })
    }
}

impl<K: std::hash::Hash + Eq, V> Default for HashLinear<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
