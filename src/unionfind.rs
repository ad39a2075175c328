// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Weighted quick-union with union-by-size (no path compression): each
//! site's parent pointer is an index into a flat array, and `union`
//! always hangs the smaller tree under the larger tree's root so no tree
//! grows taller than `log2(n)`.

use crate::error::{LatticeError, LatticeResult};

/// A disjoint-set-union structure over `n` fixed sites numbered `0..n`.
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct components currently standing.
    pub fn count(&self) -> usize {
        self.count
    }

    fn check_site(&self, p: usize) -> LatticeResult<()> {
        if p >= self.parent.len() {
            return Err(LatticeError::IndexOutOfRange {
                index: p as i64,
                bound: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Root of the component containing `p`, without path compression.
    pub fn find(&self, p: usize) -> LatticeResult<usize> {
        self.check_site(p)?;
        let mut root = p;
        while root != self.parent[root] {
            root = self.parent[root];
        }
        Ok(root)
    }

    pub fn connected(&self, p: usize, q: usize) -> LatticeResult<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components containing `p` and `q`, hanging the smaller
    /// tree's root under the larger tree's root. A no-op if already
    /// connected.
    pub fn union(&mut self, p: usize, q: usize) -> LatticeResult<()> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(())
    }

    /// Number of sites in `p`'s component.
    pub fn component_size(&self, p: usize) -> LatticeResult<usize> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }
}
