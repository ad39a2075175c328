// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Undirected graph with an adjacency-list representation. Each edge
//! `v-w` is recorded on both `adj[v]` and `adj[w]`; a self-loop appears
//! twice in its own vertex's list, matching the source library's degree
//! bookkeeping.

use crate::error::{LatticeError, LatticeResult};

/// An undirected graph over vertices `0..v`.
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn check_vertex(&self, v: usize) -> LatticeResult<()> {
        if v >= self.adj.len() {
            return Err(LatticeError::IndexOutOfRange {
                index: v as i64,
                bound: self.adj.len(),
            });
        }
        Ok(())
    }

    pub fn add_edge(&mut self, v: usize, w: usize) -> LatticeResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        // A self-loop is pushed twice onto its own vertex's list so that
        // `degree` counts it twice, matching the convention that every
        // edge contributes 2 to the sum of degrees.
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Length of every vertex's adjacency list, in vertex order. Used
    /// by [`super::euler`] to size its per-slot "used" bookkeeping
    /// without borrowing each list individually.
    pub fn adj_lens(&self) -> Vec<usize> {
        self.adj.iter().map(Vec::len).collect()
    }
}
