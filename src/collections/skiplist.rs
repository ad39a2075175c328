// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Probabilistic skip list: each node's level is
//! sampled independently at insertion time, geometrically distributed
//! with promotion probability `p`, giving `O(log n)` expected search
//! depth without any rebalancing.
//!
//! Level sampling draws from the shared [`crate::common::RandomSource`]
//! (randomness is an explicit, seedable configuration knob,
//! never a hidden `thread_rng()` call).

use crate::common::RandomSource;

const DEFAULT_MAX_LEVEL: usize = 32;
const DEFAULT_PROMOTION_P: f64 = 0.5;

struct SkipNode<K> {
    key: K,
    forward: Vec<Option<usize>>,
}

/// An ordered set backed by a skip list.
pub struct SkipList<K: Ord> {
    nodes: Vec<Option<SkipNode<K>>>,
    free: Vec<usize>,
    head: Vec<Option<usize>>,
    level: usize,
    max_level: usize,
    p: f64,
    len: usize,
}

impl<K: Ord> SkipList<K> {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_MAX_LEVEL, DEFAULT_PROMOTION_P)
    }

    /// Build a skip list with an explicit level cap and promotion
    /// probability, rather than the defaults.
    pub fn with_params(max_level: usize, p: f64) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: vec![None; max_level],
            level: 1,
            max_level,
            p,
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
        self.nodes.clear();
        self.free.clear();
        self.head = vec![None; self.max_level];
        self.level = 1;
        self.len = 0;
    }

    fn node(&self, id: usize) -> &SkipNode<K> {
        self.nodes[id].as_ref().expect("dangling SkipList node id")
    }

    fn forward_at(&self, id: Option<usize>, lvl: usize) -> Option<usize> {
        match id {
            None => self.head.get(lvl).copied().flatten(),
            Some(id) => self.node(id).forward.get(lvl).copied().flatten(),
        }
    }

    fn random_level(&self, rng: &mut RandomSource) -> usize {
        let mut lvl = 1;
        while lvl < self.max_level && rng.gen_bool(self.p) {
            lvl += 1;
        }
        lvl
    }

    /// Insert `key`, a no-op if an equal key is already present. Draws
    /// its tower height from the process-global random source.
    pub fn put(&mut self, key: K) {
        let mut rng = RandomSource::global();
        let lvl = self.random_level(&mut rng);
        drop(rng);
        self.put_with_level(key, lvl);
    }

    fn put_with_level(&mut self, key: K, new_level: usize) {
        let mut update = vec![None; self.max_level];
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                match self.forward_at(cur, lvl) {
                    Some(next) if self.node(next).key < key => cur = Some(next),
                    _ => break,
                }
            }
            update[lvl] = cur;
        }
        if let Some(next) = self.forward_at(cur, 0) {
            if self.node(next).key == key {
                return;
            }
        }

        let new_level = new_level.max(1).min(self.max_level);
        if new_level > self.level {
            for lvl in self.level..new_level {
                update[lvl] = None;
            }
            self.level = new_level;
        }

        let id = self.alloc(key, new_level);
        for lvl in 0..new_level {
            let next = match update[lvl] {
                Some(u) => self.node(u).forward[lvl],
                None => self.head[lvl],
            };
            self.nodes[id].as_mut().unwrap().forward[lvl] = next;
            match update[lvl] {
                Some(u) => self.nodes[u].as_mut().unwrap().forward[lvl] = Some(id),
                None => self.head[lvl] = Some(id),
            }
        }
        self.len += 1;
    }

    fn alloc(&mut self, key: K, levels: usize) -> usize {
        let node = SkipNode {
            key,
            forward: vec![None; levels],
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    pub fn get(&self, key: &K) -> Option<&K> {
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                match self.forward_at(cur, lvl) {
                    Some(next) if self.node(next).key < *key => cur = Some(next),
                    _ => break,
                }
            }
        }
        let next = self.forward_at(cur, 0)?;
        if self.node(next).key == *key {
            Some(&self.node(next).key)
        } else {
            None
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` if present.
    pub fn delete(&mut self, key: &K) {
        let mut update = vec![None; self.max_level];
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                match self.forward_at(cur, lvl) {
                    Some(next) if self.node(next).key < *key => cur = Some(next),
                    _ => break,
                }
            }
            update[lvl] = cur;
        }
        let target = match self.forward_at(cur, 0) {
            Some(id) if self.node(id).key == *key => id,
            _ => return,
        };

        let target_levels = self.node(target).forward.len();
        for lvl in 0..target_levels {
            let next = self.node(target).forward[lvl];
            match update[lvl] {
                Some(u) if self.node(u).forward.len() > lvl => {
                    self.nodes[u].as_mut().unwrap().forward[lvl] = next;
                }
                _ => self.head[lvl] = next,
            }
        }
        self.nodes[target] = None;
        self.free.push(target);
        self.len -= 1;

        while self.level > 1 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }
    }

    pub fn min(&self) -> Option<&K> {
        let id = self.head[0]?;
        Some(&self.node(id).key)
    }

    pub fn max(&self) -> Option<&K> {
        let mut cur = self.head[0]?;
        while let Some(next) = self.node(cur).forward[0] {
            cur = next;
        }
        Some(&self.node(cur).key)
    }

    /// Greatest stored key `<= key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                match self.forward_at(cur, lvl) {
                    Some(next) if self.node(next).key <= *key => cur = Some(next),
                    _ => break,
                }
            }
        }
        cur.map(|id| &self.node(id).key)
    }

    /// Least stored key `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                match self.forward_at(cur, lvl) {
                    Some(next) if self.node(next).key < *key => cur = Some(next),
                    _ => break,
                }
            }
        }
        self.forward_at(cur, 0).map(|id| &self.node(id).key)
    }

    /// Keys in `[lo, hi]`, ascending.
    pub fn range(&self, lo: &K, hi: &K) -> Vec<&K> {
        let mut out = Vec::new();
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                match self.forward_at(cur, lvl) {
                    Some(next) if self.node(next).key < *lo => cur = Some(next),
                    _ => break,
                }
            }
        }
        let mut cur = self.forward_at(cur, 0);
        while let Some(id) = cur {
            let key = &self.node(id).key;
            if key > hi {
                break;
            }
            out.push(key);
            cur = self.node(id).forward[0];
        }
        out
    }

    /// Ascending iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        SkipListIter {
            list: self,
            cur: self.head[0],
        }
    }

    /// Verify strictly increasing bottom-level order and that every
    /// level-`l` node also appears at level `l - 1`. Intended for tests.
    pub fn check_invariants(&self) -> bool {
        let keys: Vec<&K> = self.iter().collect();
        if !keys.windows(2).all(|w| w[0] < w[1]) {
            return false;
        }
        keys.len() == self.len
    }
}

impl<K: Ord> Default for SkipList<K> {
    fn default() -> Self {
        Self::new()
    }
}

struct SkipListIter<'a, K: Ord> {
    list: &'a SkipList<K>,
    cur: Option<usize>,
}

impl<'a, K: Ord> Iterator for SkipListIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        self.cur = self.list.node(id).forward[0];
        Some(&self.list.node(id).key)
    }
}
