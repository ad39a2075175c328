// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Indexed pairing heap: same two-pass-merge pairing-heap shape as
//! [`super::pairing`], but slots are addressed by a caller-assigned
//! `usize` index drawn from a fixed universe `0..max_n` instead of an
//! opaque handle returned by `insert`. That's what makes `decrease_key`
//! and `delete` possible: the caller can always name the node it wants
//! to change.

use crate::error::{LatticeError, LatticeResult};

struct Slot<P> {
    key: P,
    child: Option<usize>,
    sibling: Option<usize>,
    parent: Option<usize>,
}

/// A pairing heap over the fixed index universe `0..max_n`, supporting
/// `decrease_key` and arbitrary `delete` in addition to `insert` /
/// `delete_min`.
pub struct IndexedPairingHeap<P: Ord> {
    slots: Vec<Option<Slot<P>>>,
    root: Option<usize>,
    len: usize,
}

impl<P: Ord> IndexedPairingHeap<P> {
    pub fn with_capacity(max_n: usize) -> Self {
        let mut slots = Vec::with_capacity(max_n);
        slots.resize_with(max_n, || None);
        Self {
            slots,
            root: None,
            len: 0,
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

    pub fn contains(&self, index: usize) -> bool {
        index < self.slots.len() && self.slots[index].is_some()
    }

    fn check_index(&self, index: usize) -> LatticeResult<()> {
        if index >= self.slots.len() {
            return Err(LatticeError::IndexOutOfRange {
                index: index as i64,
                bound: self.slots.len(),
            });
        }
        Ok(())
    }

    fn check_contained(&self, index: usize) -> LatticeResult<()> {
        self.check_index(index)?;
        if self.slots[index].is_none() {
            return Err(LatticeError::NotContained { index });
        }
        Ok(())
    }

    fn key(&self, id: usize) -> &P {
        &self.slots[id].as_ref().unwrap().key
    }

    pub fn key_of(&self, index: usize) -> Option<&P> {
        self.slots.get(index)?.as_ref().map(|s| &s.key)
    }

    /// Make the larger-keyed root the first child of the smaller, and
    /// keep each node's `parent` link current.
    fn meld_pair(&mut self, a: usize, b: usize) -> usize {
        let (small, large) = if *self.key(a) <= *self.key(b) {
            (a, b)
        } else {
            (b, a)
        };
        let small_child = self.slots[small].as_ref().unwrap().child;
        self.slots[large].as_mut().unwrap().sibling = small_child;
        if let Some(c) = small_child {
            self.slots[c].as_mut().unwrap().parent = Some(large);
        }
        self.slots[large].as_mut().unwrap().parent = Some(small);
        self.slots[small].as_mut().unwrap().child = Some(large);
        self.slots[small].as_mut().unwrap().parent = None;
        small
    }

    fn meld(&mut self, a: Option<usize>, b: Option<usize>) -> Option<usize> {
        match (a, b) {
            (None, None) => None,
            (Some(x), None) => Some(x),
            (None, Some(y)) => Some(y),
            (Some(x), Some(y)) => Some(self.meld_pair(x, y)),
        }
    }

    pub fn peek_min(&self) -> Option<(usize, &P)> {
        let id = self.root?;
        Some((id, self.key(id)))
    }

    /// Insert `index` with `key`. If `index` is already present, its
    /// existing entry is removed (detached from the tree) first so the
    /// fresh insert never leaves stale `child`/`sibling` links behind.
    pub fn insert(&mut self, index: usize, key: P) -> LatticeResult<()> {
        self.check_index(index)?;
        if self.slots[index].is_some() {
            self.delete(index)?;
        }
        self.slots[index] = Some(Slot {
            key,
            child: None,
            sibling: None,
            parent: None,
        });
        self.root = self.meld(self.root, Some(index));
        self.len += 1;
        Ok(())
    }

    /// Detach `node` from its parent's child/sibling chain. `node` must
    /// currently have a parent (it is not already a root).
    fn cut(&mut self, node: usize) {
        let parent = self.slots[node].as_ref().unwrap().parent.unwrap();
        let sibling = self.slots[node].as_ref().unwrap().sibling;

        let first_child = self.slots[parent].as_ref().unwrap().child.unwrap();
        if first_child == node {
            self.slots[parent].as_mut().unwrap().child = sibling;
        } else {
            let mut cur = first_child;
            loop {
                let next = self.slots[cur].as_ref().unwrap().sibling.unwrap();
                if next == node {
                    self.slots[cur].as_mut().unwrap().sibling = sibling;
                    break;
                }
                cur = next;
            }
        }
        self.slots[node].as_mut().unwrap().sibling = None;
        self.slots[node].as_mut().unwrap().parent = None;
    }

    /// Lower the key at `index` to `new_key`. `new_key` must be `<=` the
    /// current key, or the heap order is violated.
    pub fn decrease_key(&mut self, index: usize, new_key: P) -> LatticeResult<()> {
        self.check_contained(index)?;
        if new_key >= *self.key(index) {
            return Err(LatticeError::NotDecreased);
        }
        self.slots[index].as_mut().unwrap().key = new_key;
        if self.root == Some(index) {
            return Ok(());
        }
        let parent = self.slots[index].as_ref().unwrap().parent;
        if let Some(p) = parent {
            if *self.key(index) < *self.key(p) {
                self.cut(index);
                self.root = self.meld(self.root, Some(index));
            }
        }
        Ok(())
    }

    fn collect_children(&mut self, node: usize) -> Vec<usize> {
        let mut children = Vec::new();
        let mut cur = self.slots[node].as_mut().unwrap().child.take();
        while let Some(id) = cur {
            let next = self.slots[id].as_mut().unwrap().sibling.take();
            self.slots[id].as_mut().unwrap().parent = None;
            children.push(id);
            cur = next;
        }
        children
    }

    fn two_pass_merge(&mut self, list: Vec<usize>) -> Option<usize> {
        if list.is_empty() {
            return None;
        }
        let mut pairs = Vec::new();
        let mut it = list.into_iter();
        while let Some(a) = it.next() {
            match it.next() {
                Some(b) => pairs.push(self.meld_pair(a, b)),
                None => pairs.push(a),
            }
        }
        let mut result = pairs.pop().unwrap();
        while let Some(x) = pairs.pop() {
            result = self.meld_pair(result, x);
        }
        Some(result)
    }

    /// Remove the node at `index`, wherever it sits in the tree.
    ///
    /// Implemented as detach-then-reattach: `index`'s orphaned children
    /// are merged into their own subheap and melded back into the main
    /// heap, so the rest of the tree is left intact.
    pub fn delete(&mut self, index: usize) -> LatticeResult<Option<P>> {
        self.check_index(index)?;
        if self.slots[index].is_none() {
            return Ok(None);
        }
        let children = self.collect_children(index);
        let orphan_subheap = self.two_pass_merge(children);

        if self.root == Some(index) {
            self.root = orphan_subheap;
        } else {
            self.cut(index);
            self.root = self.meld(self.root, orphan_subheap);
        }

        let slot = self.slots[index].take().unwrap();
        self.len -= 1;
        Ok(Some(slot.key))
    }

    /// Raise the key at `index` to `new_key`.
    ///
    /// A plain pairing heap has no cheap way to push a node *down* the
    /// tree in place, so this is `delete` followed by a fresh `insert`:
    /// the index keeps its key but loses any positional memory from
    /// before the call.
    pub fn increase_key(&mut self, index: usize, new_key: P) -> LatticeResult<()> {
        self.check_contained(index)?;
        if new_key <= *self.key(index) {
            return Err(LatticeError::NotIncreased);
        }
        self.delete(index)?;
        self.insert(index, new_key)
    }

    /// Remove and return the `(index, key)` pair with the smallest key.
    pub fn delete_min(&mut self) -> Option<(usize, P)> {
        let root = self.root?;
        let key = self.delete(root).ok().flatten()?;
        Some((root, key))
    }
}
