// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Symbol digraph: lets callers build and query a graph by name
//! (`"Atlanta"`, `"Chicago"`) instead of by bare vertex index.
//! Edges are buffered as name pairs and the underlying [`Digraph`] is
//! built lazily on first query, once every distinct name (and thus the
//! final vertex count) is known — mirroring a two-pass read of a
//! symbol-graph text file: first pass assigns indices, second pass
//! adds edges.

use std::collections::HashMap;

use super::digraph::Digraph;
use crate::error::{LatticeError, LatticeResult};

/// A directed graph addressed by string vertex names.
#[derive(Debug, Clone)]
pub struct SymbolDigraph {
    index_of: HashMap<String, usize>,
    names: Vec<String>,
    pending_edges: Vec<(usize, usize)>,
    graph: Option<Digraph>,
}

impl SymbolDigraph {
    pub fn new() -> Self {
        Self {
            index_of: HashMap::new(),
            names: Vec::new(),
            pending_edges: Vec::new(),
            graph: None,
        }
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index_of.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index_of.insert(name.to_string(), id);
        id
    }

    /// Add the directed edge `from -> to`, creating either name's
    /// vertex if it hasn't been seen before. Invalidates any
    /// previously built graph so the next [`Self::graph`] call rebuilds
    /// it with the new edge included.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let v = self.intern(from);
        let w = self.intern(to);
        self.pending_edges.push((v, w));
        self.graph = None;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).copied()
    }

    pub fn name_of(&self, index: usize) -> LatticeResult<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(LatticeError::IndexOutOfRange {
                index: index as i64,
                bound: self.names.len(),
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// The underlying index-addressed digraph, built (or rebuilt, if
    /// edges were added since the last call) from every name seen so
    /// far.
    pub fn graph(&mut self) -> &Digraph {
        if self.graph.is_none() {
            let mut g = Digraph::new(self.names.len());
            for &(v, w) in &self.pending_edges {
                g.add_edge(v, w).unwrap();
            }
            self.graph = Some(g);
        }
        self.graph.as_ref().unwrap()
    }
}

impl Default for SymbolDigraph {
    fn default() -> Self {
        Self::new()
    }
}
