// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Indexed binomial heap: the same degree-carrying root list as
//! [`super::binomial`], but every node also tracks its `parent` and the
//! caller-assigned external index it currently holds, and a `pos` table
//! maps each external index back to the node id presently storing it.
//!
//! `decrease_key` sifts a node up by swapping its `(index, key)` payload
//! with its parent's, exactly like `DECREASE-KEY` on a binary heap
//! stored as an implicit array — the difference is just that "parent"
//! is a real pointer instead of `i/2`. `delete` sifts the target all the
//! way to the root of its tree the same way, then discards that tree's
//! root and re-unions its orphaned children, mirroring `delete_min`.

use crate::error::{LatticeError, LatticeResult};

struct Node<P> {
    index: usize,
    key: P,
    parent: Option<usize>,
    child: Option<usize>,
    sibling: Option<usize>,
    degree: usize,
}

/// A binomial heap over the fixed index universe `0..max_n`, supporting
/// `decrease_key` and arbitrary `delete` in addition to `insert` /
/// `delete_min`.
pub struct IndexedBinomialHeap<P: Ord> {
    nodes: Vec<Option<Node<P>>>,
    free: Vec<usize>,
    pos: Vec<Option<usize>>,
    head: Option<usize>,
    len: usize,
}

impl<P: Ord> IndexedBinomialHeap<P> {
    pub fn with_capacity(max_n: usize) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            pos: vec![None; max_n],
            head: None,
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
        self.pos.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.pos.len() && self.pos[index].is_some()
    }

    fn check_index(&self, index: usize) -> LatticeResult<()> {
        if index >= self.pos.len() {
            return Err(LatticeError::IndexOutOfRange {
                index: index as i64,
                bound: self.pos.len(),
            });
        }
        Ok(())
    }

    fn check_contained(&self, index: usize) -> LatticeResult<()> {
        self.check_index(index)?;
        if self.pos[index].is_none() {
            return Err(LatticeError::NotContained { index });
        }
        Ok(())
    }

    pub fn key_of(&self, index: usize) -> Option<&P> {
        let id = *self.pos.get(index)?;
        id.map(|id| &self.nodes[id].as_ref().unwrap().key)
    }

    fn alloc(&mut self, index: usize, key: P) -> usize {
        let node = Node {
            index,
            key,
            parent: None,
            child: None,
            sibling: None,
            degree: 0,
        };
        let id = if let Some(id) = self.free.pop() {
            self.nodes[id] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        };
        self.pos[index] = Some(id);
        id
    }

    fn degree(&self, id: usize) -> usize {
        self.nodes[id].as_ref().unwrap().degree
    }

    fn key(&self, id: usize) -> &P {
        &self.nodes[id].as_ref().unwrap().key
    }

    fn merge_root_lists(&mut self, a: Option<usize>, b: Option<usize>) -> Option<usize> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(x), Some(y)) => {
                if self.degree(x) <= self.degree(y) {
                    let rest = self.nodes[x].as_ref().unwrap().sibling;
                    let merged = self.merge_root_lists(rest, Some(y));
                    self.nodes[x].as_mut().unwrap().sibling = merged;
                    Some(x)
                } else {
                    let rest = self.nodes[y].as_ref().unwrap().sibling;
                    let merged = self.merge_root_lists(Some(x), rest);
                    self.nodes[y].as_mut().unwrap().sibling = merged;
                    Some(y)
                }
            }
        }
    }

    fn link(&mut self, child: usize, parent: usize) {
        let old_child = self.nodes[parent].as_ref().unwrap().child;
        self.nodes[child].as_mut().unwrap().sibling = old_child;
        self.nodes[child].as_mut().unwrap().parent = Some(parent);
        self.nodes[parent].as_mut().unwrap().child = Some(child);
        self.nodes[parent].as_mut().unwrap().degree += 1;
    }

    fn union(&mut self, h1: Option<usize>, h2: Option<usize>) -> Option<usize> {
        let head = self.merge_root_lists(h1, h2);
        let head = match head {
            None => return None,
            Some(h) => h,
        };
        self.nodes[head].as_mut().unwrap().parent = None;
        let mut prev: Option<usize> = None;
        let mut cur = head;
        let mut next = self.nodes[cur].as_ref().unwrap().sibling;
        let mut result_head = Some(head);

        while let Some(next_id) = next {
            self.nodes[next_id].as_mut().unwrap().parent = None;
            let next_next = self.nodes[next_id].as_ref().unwrap().sibling;
            let same_degree = self.degree(cur) == self.degree(next_id);
            let triple_degree = next_next.map_or(false, |n| self.degree(n) == self.degree(cur));

            if !same_degree || triple_degree {
                prev = Some(cur);
                cur = next_id;
            } else if *self.key(cur) <= *self.key(next_id) {
                self.nodes[cur].as_mut().unwrap().sibling = next_next;
                self.link(next_id, cur);
            } else {
                match prev {
                    None => result_head = Some(next_id),
                    Some(p) => self.nodes[p].as_mut().unwrap().sibling = Some(next_id),
                }
                self.link(cur, next_id);
                cur = next_id;
            }
            next = self.nodes[cur].as_ref().unwrap().sibling;
        }
        result_head
    }

    pub fn insert(&mut self, index: usize, key: P) -> LatticeResult<()> {
        self.check_index(index)?;
        if self.pos[index].is_some() {
            self.delete(index)?;
        }
        let id = self.alloc(index, key);
        self.head = self.union(self.head, Some(id));
        self.len += 1;
        Ok(())
    }

    fn min_root(&self) -> Option<usize> {
        let mut best = self.head?;
        let mut cur = self.nodes[best].as_ref().unwrap().sibling;
        while let Some(id) = cur {
            if *self.key(id) < *self.key(best) {
                best = id;
            }
            cur = self.nodes[id].as_ref().unwrap().sibling;
        }
        Some(best)
    }

    pub fn peek_min(&self) -> Option<(usize, &P)> {
        let id = self.min_root()?;
        let node = self.nodes[id].as_ref().unwrap();
        Some((node.index, &node.key))
    }

    fn sift_up(&mut self, mut id: usize) -> usize {
        while let Some(parent) = self.nodes[id].as_ref().unwrap().parent {
            if *self.key(id) < *self.key(parent) {
                self.swap_only_payload(id, parent);
                id = parent;
            } else {
                break;
            }
        }
        id
    }

    /// Swap only the `(index, key)` payload of two nodes, leaving every
    /// structural field (`parent`/`child`/`sibling`/`degree`) untouched.
    fn swap_only_payload(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.nodes.split_at_mut(hi);
        let n_lo = left[lo].as_mut().unwrap();
        let n_hi = right[0].as_mut().unwrap();
        std::mem::swap(&mut n_lo.index, &mut n_hi.index);
        std::mem::swap(&mut n_lo.key, &mut n_hi.key);
        self.pos[n_lo.index] = Some(lo);
        self.pos[n_hi.index] = Some(hi);
    }

    /// Lower the key at `index` to `new_key` and sift it up toward the
    /// root of its tree until heap order is restored.
    pub fn decrease_key(&mut self, index: usize, new_key: P) -> LatticeResult<()> {
        self.check_contained(index)?;
        let id = self.pos[index].unwrap();
        if new_key >= *self.key(id) {
            return Err(LatticeError::NotDecreased);
        }
        self.nodes[id].as_mut().unwrap().key = new_key;
        self.sift_up(id);
        Ok(())
    }

    /// Remove the node at `index`, wherever it sits in its tree.
    ///
    /// Sifts the target all the way to the root of its tree (ignoring
    /// heap order along the way), then detaches that now-childless-of-
    /// its-target root from the root list and re-unions its orphaned
    /// children back in, the same cleanup `delete_min` does for the
    /// global minimum.
    pub fn delete(&mut self, index: usize) -> LatticeResult<Option<P>> {
        self.check_index(index)?;
        if self.pos[index].is_none() {
            return Ok(None);
        }
        let mut id = self.pos[index].unwrap();
        while let Some(parent) = self.nodes[id].as_ref().unwrap().parent {
            self.swap_only_payload(id, parent);
            id = parent;
        }
        // `id` is now a root holding `index`'s payload.
        let mut prev: Option<usize> = None;
        let mut cur = self.head.unwrap();
        while cur != id {
            prev = Some(cur);
            cur = self.nodes[cur].as_ref().unwrap().sibling.unwrap();
        }
        let after = self.nodes[id].as_ref().unwrap().sibling;
        match prev {
            None => self.head = after,
            Some(p) => self.nodes[p].as_mut().unwrap().sibling = after,
        }

        let mut reversed = None;
        let mut child = self.nodes[id].as_ref().unwrap().child;
        while let Some(c) = child {
            let next = self.nodes[c].as_ref().unwrap().sibling;
            self.nodes[c].as_mut().unwrap().sibling = reversed;
            self.nodes[c].as_mut().unwrap().parent = None;
            reversed = Some(c);
            child = next;
        }

        self.head = self.union(self.head, reversed);
        self.len -= 1;
        let node = self.nodes[id].take().unwrap();
        self.free.push(id);
        self.pos[index] = None;
        Ok(Some(node.key))
    }

    /// Raise the key at `index` to `new_key`.
    ///
    /// No in-place sift-down exists for a binomial tree, so this is
    /// `delete` followed by a fresh `insert`, same identity-change
    /// caveat as the pairing-heap variant.
    pub fn increase_key(&mut self, index: usize, new_key: P) -> LatticeResult<()> {
        self.check_contained(index)?;
        let id = self.pos[index].unwrap();
        if new_key <= *self.key(id) {
            return Err(LatticeError::NotIncreased);
        }
        self.delete(index)?;
        self.insert(index, new_key)
    }

    /// Remove and return the `(index, key)` pair with the smallest key.
    pub fn delete_min(&mut self) -> Option<(usize, P)> {
        let min_id = self.min_root()?;
        let index = self.nodes[min_id].as_ref().unwrap().index;
        let key = self.delete(index).ok().flatten()?;
        Some((index, key))
    }
}
