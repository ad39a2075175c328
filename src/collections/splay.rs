// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Splay tree: every access (find, insert, delete)
//! concludes by rotating the touched node to the root via zig / zig-zig /
//! zig-zag splaying, trading balance metadata for amortized `O(log n)`.
//!
//! Splaying is iterative and driven by parent pointers rather than
//! recursive, since an un-splayed access path can be `O(n)` deep and a
//! recursive splay would risk overflowing the call stack.

use std::cmp::Ordering;

type Link = Option<usize>;

struct SplayNode<K> {
    key: K,
    left: Link,
    right: Link,
    parent: Link,
    size: usize,
}

/// An ordered set backed by a splay tree.
///
/// A subtree `size` field is kept up to date across every rotation so
/// `rank`/`select` run in the same amortized `O(log n)` as everything
/// else, even though a splay tree carries no balance metadata otherwise.
pub struct SplayTree<K: Ord> {
    nodes: Vec<Option<SplayNode<K>>>,
    free: Vec<usize>,
    root: Link,
}

impl<K: Ord> Default for SplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> SplayTree<K> {
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

    fn node(&self, id: usize) -> &SplayNode<K> {
        self.nodes[id].as_ref().expect("dangling SplayTree node id")
    }

    fn size_of(&self, link: Link) -> usize {
        link.map_or(0, |id| self.node(id).size)
    }

    fn alloc(&mut self, key: K, parent: Link) -> usize {
        let node = SplayNode {
            key,
            left: None,
            right: None,
            parent,
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

    fn update_size(&mut self, id: usize) {
        let (l, r) = (self.node(id).left, self.node(id).right);
        let size = 1 + self.size_of(l) + self.size_of(r);
        self.nodes[id].as_mut().unwrap().size = size;
    }

    fn set_child(&mut self, parent: usize, child: Link, is_left: bool) {
        if is_left {
            self.nodes[parent].as_mut().unwrap().left = child;
        } else {
            self.nodes[parent].as_mut().unwrap().right = child;
        }
        if let Some(c) = child {
            self.nodes[c].as_mut().unwrap().parent = Some(parent);
        }
    }

    fn replace_child(&mut self, parent: Link, old: usize, new: Link) {
        match parent {
            None => {
                self.root = new;
                if let Some(n) = new {
                    self.nodes[n].as_mut().unwrap().parent = None;
                }
            }
            Some(p) => {
                let is_left = self.node(p).left == Some(old);
                self.set_child(p, new, is_left);
            }
        }
    }

    fn rotate_right(&mut self, x: usize) {
        let p = self.node(x).parent.expect("rotate_right needs a parent");
        let b = self.node(x).right;
        self.set_child(p, b, true);
        let gp = self.node(p).parent;
        self.replace_child(gp, p, Some(x));
        self.set_child(x, Some(p), false);
        self.update_size(p);
        self.update_size(x);
    }

    /// Rotate `x` up past its parent: right-rotation if `x` is a left
    /// child, left-rotation if `x` is a right child.
    fn rotate_up(&mut self, x: usize) {
        let p = self.node(x).parent.expect("rotate_up needs a parent");
        if self.node(p).left == Some(x) {
            self.rotate_right(x);
        } else {
            self.rotate_left(x, p);
        }
    }

    fn rotate_left(&mut self, x: usize, p: usize) {
        let b = self.node(x).left;
        self.set_child(p, b, false);
        let gp = self.node(p).parent;
        self.replace_child(gp, p, Some(x));
        self.set_child(x, Some(p), true);
        self.update_size(p);
        self.update_size(x);
    }

    /// Splay `x` to the root via zig / zig-zig / zig-zag.
    fn splay(&mut self, x: usize) {
        loop {
            let p = match self.node(x).parent {
                None => break,
                Some(p) => p,
            };
            match self.node(p).parent {
                None => {
                    // zig
                    self.rotate_up(x);
                }
                Some(g) => {
                    let p_is_left_of_g = self.node(g).left == Some(p);
                    let x_is_left_of_p = self.node(p).left == Some(x);
                    if p_is_left_of_g == x_is_left_of_p {
                        // zig-zig: rotate parent up, then x up
                        self.rotate_up(p);
                        self.rotate_up(x);
                    } else {
                        // zig-zag: rotate x up twice
                        self.rotate_up(x);
                        self.rotate_up(x);
                    }
                }
            }
        }
        self.root = Some(x);
    }

    /// Splay the last node visited while searching for `key` (the node
    /// itself if found, otherwise its would-be parent) to the root.
    fn splay_search(&mut self, key: &K) -> Option<Ordering> {
        let mut cur = self.root?;
        loop {
            match key.cmp(&self.node(cur).key) {
                Ordering::Equal => {
                    self.splay(cur);
                    return Some(Ordering::Equal);
                }
                Ordering::Less => match self.node(cur).left {
                    Some(l) => cur = l,
                    None => {
                        self.splay(cur);
                        return Some(Ordering::Less);
                    }
                },
                Ordering::Greater => match self.node(cur).right {
                    Some(r) => cur = r,
                    None => {
                        self.splay(cur);
                        return Some(Ordering::Greater);
                    }
                },
            }
        }
    }

    /// Insert `key`, a no-op if an equal key is already present.
    pub fn put(&mut self, key: K) {
        match self.splay_search(&key) {
            None => {
                let id = self.alloc(key, None);
                self.root = Some(id);
            }
            Some(Ordering::Equal) => {}
            Some(Ordering::Less) => {
                // root.key > key: new node becomes root, old root its right child
                let old_root = self.root.unwrap();
                let left = self.node(old_root).left;
                let id = self.alloc(key, None);
                self.set_child(id, left, true);
                self.set_child(id, Some(old_root), false);
                self.nodes[old_root].as_mut().unwrap().left = None;
                self.update_size(old_root);
                self.update_size(id);
                self.root = Some(id);
            }
            Some(Ordering::Greater) => {
                let old_root = self.root.unwrap();
                let right = self.node(old_root).right;
                let id = self.alloc(key, None);
                self.set_child(id, Some(old_root), true);
                self.set_child(id, right, false);
                self.nodes[old_root].as_mut().unwrap().right = None;
                self.update_size(old_root);
                self.update_size(id);
                self.root = Some(id);
            }
        }
    }

    /// Look up `key`, splaying the touched node to the root even on a
    /// miss: after any access, the touched node ends up at the root.
    pub fn get(&mut self, key: &K) -> Option<&K> {
        match self.splay_search(key) {
            Some(Ordering::Equal) => Some(&self.node(self.root.unwrap()).key),
            _ => None,
        }
    }

    pub fn contains(&mut self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` if present: splay it to the root, then join its two
    /// subtrees by splaying the left subtree's max to its root and
    /// attaching the right subtree there.
    pub fn delete(&mut self, key: &K) {
        if self.splay_search(key) != Some(Ordering::Equal) {
            return;
        }
        let root = self.root.unwrap();
        let (left, right) = (self.node(root).left, self.node(root).right);
        self.free_node(root);

        self.root = match (left, right) {
            (None, None) => None,
            (Some(l), None) => {
                self.nodes[l].as_mut().unwrap().parent = None;
                Some(l)
            }
            (None, Some(r)) => {
                self.nodes[r].as_mut().unwrap().parent = None;
                Some(r)
            }
            (Some(l), Some(r)) => {
                self.nodes[l].as_mut().unwrap().parent = None;
                self.root = Some(l);
                let max_left = self.max_node(l);
                self.splay(max_left);
                self.nodes[r].as_mut().unwrap().parent = Some(max_left);
                self.nodes[max_left].as_mut().unwrap().right = Some(r);
                self.update_size(max_left);
                Some(max_left)
            }
        };
    }

    fn free_node(&mut self, id: usize) {
        self.nodes[id] = None;
        self.free.push(id);
    }

    fn max_node(&self, mut id: usize) -> usize {
        while let Some(r) = self.node(id).right {
            id = r;
        }
        id
    }

    fn min_node(&self, mut id: usize) -> usize {
        while let Some(l) = self.node(id).left {
            id = l;
        }
        id
    }

    pub fn min(&self) -> Option<&K> {
        let id = self.min_node(self.root?);
        Some(&self.node(id).key)
    }

    pub fn max(&self) -> Option<&K> {
        let id = self.max_node(self.root?);
        Some(&self.node(id).key)
    }

    /// Greatest stored key `<= key` (does not splay; read-only query).
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

    /// Least stored key `>= key` (does not splay; read-only query).
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

    /// `true` if the tree is a valid BST at every node (invariant check
    /// for tests; a splay tree carries no balance metadata to verify).
    pub fn check_bst_invariant(&self) -> bool {
        self.check_rec(self.root).is_some()
    }

    fn check_rec(&self, link: Link) -> Option<(&K, &K)> {
        let id = link?;
        let node = self.node(id);
        let min_bound = match node.left {
            Some(l) => {
                let (lmin, lmax) = self.check_rec(Some(l))?;
                if lmax >= &node.key || self.node(l).parent != Some(id) {
                    return None;
                }
                lmin
            }
            None => &node.key,
        };
        let max_bound = match node.right {
            Some(r) => {
                let (rmin, rmax) = self.check_rec(Some(r))?;
                if rmin <= &node.key || self.node(r).parent != Some(id) {
                    return None;
                }
                rmax
            }
            None => &node.key,
        };
        Some((min_bound, max_bound))
    }
}
