// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Self-balancing AVL binary search tree.
//!
//! Balanced by construction (`|height(left) - height(right)| <= 1` at
//! every node), so depth stays `O(log n)` and the recursive insert/delete
//! below never risks the stack-depth hazard that applies to
//! unbalanced trees.

use std::cmp::Ordering;

type Link = Option<usize>;

struct AvlNode<K> {
    key: K,
    left: Link,
    right: Link,
    height: i32,
    size: usize,
}

/// An ordered set backed by an AVL tree, generic over any `Ord` key.
///
/// Freed nodes are recycled from a free list rather than leaked, so long
/// sequences of insert/delete do not grow the arena unboundedly.
pub struct AvlTree<K: Ord> {
    nodes: Vec<Option<AvlNode<K>>>,
    free: Vec<usize>,
    root: Link,
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
    }

    fn node(&self, id: usize) -> &AvlNode<K> {
        self.nodes[id].as_ref().expect("dangling AvlTree node id")
    }

    fn height_of(&self, link: Link) -> i32 {
        link.map_or(0, |id| self.node(id).height)
    }

    fn size_of(&self, link: Link) -> usize {
        link.map_or(0, |id| self.node(id).size)
    }

    fn alloc(&mut self, key: K) -> usize {
        let node = AvlNode {
            key,
            left: None,
            right: None,
            height: 1,
            size: 1,
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    fn update(&mut self, id: usize) {
        let (l, r) = (self.node(id).left, self.node(id).right);
        let height = 1 + self.height_of(l).max(self.height_of(r));
        let size = 1 + self.size_of(l) + self.size_of(r);
        let node = self.nodes[id].as_mut().unwrap();
        node.height = height;
        node.size = size;
    }

    fn balance_factor(&self, id: usize) -> i32 {
        let node = self.node(id);
        self.height_of(node.left) - self.height_of(node.right)
    }

    fn rotate_left(&mut self, id: usize) -> usize {
        let r = self.node(id).right.expect("rotate_left needs a right child");
        let rl = self.node(r).left;
        self.nodes[id].as_mut().unwrap().right = rl;
        self.nodes[r].as_mut().unwrap().left = Some(id);
        self.update(id);
        self.update(r);
        r
    }

    fn rotate_right(&mut self, id: usize) -> usize {
        let l = self.node(id).left.expect("rotate_right needs a left child");
        let lr = self.node(l).right;
        self.nodes[id].as_mut().unwrap().left = lr;
        self.nodes[l].as_mut().unwrap().right = Some(id);
        self.update(id);
        self.update(l);
        l
    }

    fn rebalance(&mut self, id: usize) -> usize {
        self.update(id);
        let balance = self.balance_factor(id);
        if balance > 1 {
            let left = self.node(id).left.unwrap();
            if self.balance_factor(left) < 0 {
                let new_left = self.rotate_left(left);
                self.nodes[id].as_mut().unwrap().left = Some(new_left);
            }
            self.rotate_right(id)
        } else if balance < -1 {
            let right = self.node(id).right.unwrap();
            if self.balance_factor(right) > 0 {
                let new_right = self.rotate_right(right);
                self.nodes[id].as_mut().unwrap().right = Some(new_right);
            }
            self.rotate_left(id)
        } else {
            id
        }
    }

    /// Insert `key`, a no-op if an equal key is already present.
    pub fn put(&mut self, key: K) {
        self.root = Some(self.put_rec(self.root, key));
    }

    fn put_rec(&mut self, link: Link, key: K) -> usize {
        let id = match link {
            None => return self.alloc(key),
            Some(id) => id,
        };
        match key.cmp(&self.node(id).key) {
            Ordering::Less => {
                let left = self.node(id).left;
                let new_left = self.put_rec(left, key);
                self.nodes[id].as_mut().unwrap().left = Some(new_left);
            }
            Ordering::Greater => {
                let right = self.node(id).right;
                let new_right = self.put_rec(right, key);
                self.nodes[id].as_mut().unwrap().right = Some(new_right);
            }
            Ordering::Equal => return id,
        }
        self.rebalance(id)
    }

    /// Borrow the stored key equal to `key`, if present.
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut cur = self.root;
        while let Some(id) = cur {
            match key.cmp(&self.node(id).key) {
                Ordering::Less => cur = self.node(id).left,
                Ordering::Greater => cur = self.node(id).right,
                Ordering::Equal => return Some(&self.node(id).key),
            }
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` if present.
    pub fn delete(&mut self, key: &K) {
        if self.root.is_none() {
            return;
        }
        self.root = self.delete_rec(self.root, key);
    }

    fn delete_rec(&mut self, link: Link, key: &K) -> Link {
        let id = link?;
        match key.cmp(&self.node(id).key) {
            Ordering::Less => {
                let left = self.node(id).left;
                let new_left = self.delete_rec(left, key);
                self.nodes[id].as_mut().unwrap().left = new_left;
            }
            Ordering::Greater => {
                let right = self.node(id).right;
                let new_right = self.delete_rec(right, key);
                self.nodes[id].as_mut().unwrap().right = new_right;
            }
            Ordering::Equal => {
                let (left, right) = (self.node(id).left, self.node(id).right);
                return match (left, right) {
                    (None, None) => {
                        self.free_node(id);
                        None
                    }
                    (Some(l), None) => {
                        self.free_node(id);
                        Some(l)
                    }
                    (None, Some(r)) => {
                        self.free_node(id);
                        Some(r)
                    }
                    (Some(_), Some(r)) => {
                        let (successor, new_right) = self.extract_min(Some(r));
                        // Reuse `id`'s slot: move the successor key into it.
                        self.nodes[id].as_mut().unwrap().key = successor;
                        self.nodes[id].as_mut().unwrap().right = new_right;
                        Some(id)
                    }
                };
            }
        }
        Some(self.rebalance(id))
    }

    /// Remove the minimum-keyed node from the subtree rooted at `link`,
    /// moving its key out (no `Clone` needed) and returning it alongside
    /// the rebalanced remainder of the subtree.
    fn extract_min(&mut self, link: Link) -> (K, Link) {
        let id = link.expect("extract_min requires a non-empty subtree");
        if self.node(id).left.is_none() {
            let right = self.node(id).right;
            let key = self.nodes[id].take().unwrap().key;
            self.free.push(id);
            return (key, right);
        }
        let left = self.node(id).left;
        let (key, new_left) = self.extract_min(left);
        self.nodes[id].as_mut().unwrap().left = new_left;
        (key, Some(self.rebalance(id)))
    }

    fn free_node(&mut self, id: usize) {
        self.nodes[id] = None;
        self.free.push(id);
    }

    pub fn min(&self) -> Option<&K> {
        let mut cur = self.root?;
        while let Some(l) = self.node(cur).left {
            cur = l;
        }
        Some(&self.node(cur).key)
    }

    pub fn max(&self) -> Option<&K> {
        let mut cur = self.root?;
        while let Some(r) = self.node(cur).right {
            cur = r;
        }
        Some(&self.node(cur).key)
    }

    /// Greatest stored key `<= key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        let mut cur = self.root;
        let mut best: Link = None;
        while let Some(id) = cur {
            match key.cmp(&self.node(id).key) {
                Ordering::Less => cur = self.node(id).left,
                Ordering::Greater => {
                    best = Some(id);
                    cur = self.node(id).right;
                }
                Ordering::Equal => return Some(&self.node(id).key),
            }
        }
        best.map(|id| &self.node(id).key)
    }

    /// Least stored key `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        let mut cur = self.root;
        let mut best: Link = None;
        while let Some(id) = cur {
            match key.cmp(&self.node(id).key) {
                Ordering::Greater => cur = self.node(id).right,
                Ordering::Less => {
                    best = Some(id);
                    cur = self.node(id).left;
                }
                Ordering::Equal => return Some(&self.node(id).key),
            }
        }
        best.map(|id| &self.node(id).key)
    }

    /// Number of stored keys strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        let mut cur = self.root;
        let mut rank = 0;
        while let Some(id) = cur {
            match key.cmp(&self.node(id).key) {
                Ordering::Less => cur = self.node(id).left,
                Ordering::Equal => {
                    rank += self.size_of(self.node(id).left);
                    break;
                }
                Ordering::Greater => {
                    rank += self.size_of(self.node(id).left) + 1;
                    cur = self.node(id).right;
                }
            }
        }
        rank
    }

    /// The key of rank `r` (0-indexed), or `None` if `r >= len()`.
    pub fn select(&self, r: usize) -> Option<&K> {
        if r >= self.len() {
            return None;
        }
        let mut cur = self.root?;
        let mut r = r;
        loop {
            let left_size = self.size_of(self.node(cur).left);
            match r.cmp(&left_size) {
                Ordering::Less => cur = self.node(cur).left?,
                Ordering::Equal => return Some(&self.node(cur).key),
                Ordering::Greater => {
                    r -= left_size + 1;
                    cur = self.node(cur).right?;
                }
            }
        }
    }

    /// Keys in `[lo, hi]`, ascending.
    pub fn range(&self, lo: &K, hi: &K) -> Vec<&K> {
        let mut out = Vec::new();
        self.range_rec(self.root, lo, hi, &mut out);
        out
    }

    fn range_rec<'a>(&'a self, link: Link, lo: &K, hi: &K, out: &mut Vec<&'a K>) {
        let id = match link {
            Some(id) => id,
            None => return,
        };
        let key = &self.node(id).key;
        if key > lo {
            self.range_rec(self.node(id).left, lo, hi, out);
        }
        if key >= lo && key <= hi {
            out.push(key);
        }
        if key < hi {
            self.range_rec(self.node(id).right, lo, hi, out);
        }
    }

    /// Verify BST order, balance, size, and rank/select invariants
    /// Intended for tests.
    pub fn check_invariants(&self) -> bool {
        self.check_rec(self.root).is_some()
            && (0..self.len()).all(|r| self.rank(self.select(r).unwrap()) == r)
    }

    /// Returns `Some((min, max))` of the subtree if every invariant
    /// holds, else `None`.
    fn check_rec(&self, link: Link) -> Option<(&K, &K)> {
        let id = link?;
        let node = self.node(id);
        if (self.height_of(node.left) - self.height_of(node.right)).abs() > 1 {
            return None;
        }
        if node.size != 1 + self.size_of(node.left) + self.size_of(node.right) {
            return None;
        }
        let min_bound = match node.left {
            Some(l) => {
                let (lmin, lmax) = self.check_rec(Some(l))?;
                if lmax >= &node.key {
                    return None;
                }
                lmin
            }
            None => &node.key,
        };
        let max_bound = match node.right {
            Some(r) => {
                let (rmin, rmax) = self.check_rec(Some(r))?;
                if rmin <= &node.key {
                    return None;
                }
                rmax
            }
            None => &node.key,
        };
        Some((min_bound, max_bound))
    }
}
