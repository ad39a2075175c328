// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Directed graph with an adjacency-list representation: `adj[v]` lists
//! every vertex `w` such that the edge `v -> w` exists. Self-loops and
//! parallel edges are both permitted, matching the source library.

use crate::error::{LatticeError, LatticeResult};

/// A directed graph over vertices `0..v`.
#[derive(Debug, Clone)]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    indegree: Vec<usize>,
    edge_count: usize,
}

impl Digraph {
    pub fn new(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
            indegree: vec![0; v],
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

    /// Add the directed edge `v -> w`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> LatticeResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.adj[v].push(w);
        self.indegree[w] += 1;
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub fn outdegree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    pub fn indegree(&self, v: usize) -> usize {
        self.indegree[v]
    }

    /// The digraph with every edge's direction reversed.
    pub fn reverse(&self) -> Digraph {
        let mut r = Digraph::new(self.vertex_count());
        for v in 0..self.vertex_count() {
            for &w in self.adj(v) {
                r.add_edge(w, v).unwrap();
            }
        }
        r
    }
}
