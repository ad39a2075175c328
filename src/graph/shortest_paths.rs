// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Shortest paths on edge-weighted digraphs: Dijkstra's algorithm for
//! non-negative weights (single-source and all-pairs, both driven by
//! an [`IndexedBinomialHeap`]), and Floyd-Warshall for the general
//! all-pairs case, which tolerates negative weights and detects
//! negative cycles.

use super::ewgraph::{AdjMatrixEWDigraph, EdgeWeightedDigraph};
use crate::error::{LatticeError, LatticeResult};
use crate::pq::IndexedBinomialHeap;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Dist(f64);
impl Eq for Dist {}
impl Ord for Dist {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).expect("distances are never NaN")
    }
}

/// Single-source distances and the edge tree reconstructing shortest
/// paths, as produced by [`dijkstra`].
pub struct SsspResult {
    dist_to: Vec<f64>,
    edge_to: Vec<Option<usize>>,
}

impl SsspResult {
    pub fn dist_to(&self, v: usize) -> f64 {
        self.dist_to[v]
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v].is_finite()
    }

    /// Vertices on the shortest path from the source to `v`, in order.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = vec![v];
        let mut cur = v;
        while let Some(prev) = self.edge_to[cur] {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `source`. Errs with `NegativeEdgeWeight`
/// as soon as a negative-weight edge is encountered, since Dijkstra's
/// greedy relaxation order assumes non-negative weights.
pub fn dijkstra(g: &EdgeWeightedDigraph, source: usize) -> LatticeResult<SsspResult> {
    for edge in g.edges() {
        if edge.weight < 0.0 {
            return Err(LatticeError::NegativeEdgeWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });
        }
    }

    let n = g.vertex_count();
    let mut dist_to = vec![f64::INFINITY; n];
    let mut edge_to: Vec<Option<usize>> = vec![None; n];
    dist_to[source] = 0.0;

    let mut pq: IndexedBinomialHeap<Dist> = IndexedBinomialHeap::with_capacity(n);
    pq.insert(source, Dist(0.0)).unwrap();

    while let Some((v, Dist(dv))) = pq.delete_min() {
        if dv > dist_to[v] {
            continue;
        }
        for &id in g.adj(v) {
            let e = g.edge(id);
            let w = e.to;
            let candidate = dv + e.weight;
            if candidate < dist_to[w] {
                dist_to[w] = candidate;
                edge_to[w] = Some(v);
                if pq.contains(w) {
                    pq.decrease_key(w, Dist(candidate)).unwrap();
                } else {
                    pq.insert(w, Dist(candidate)).unwrap();
                }
            }
        }
    }

    Ok(SsspResult { dist_to, edge_to })
}

/// `dijkstra` run from every vertex; `result[v].dist_to(w)` is the
/// shortest distance from `v` to `w`.
pub fn dijkstra_all_pairs(g: &EdgeWeightedDigraph) -> LatticeResult<Vec<SsspResult>> {
    (0..g.vertex_count()).map(|v| dijkstra(g, v)).collect()
}

/// All-pairs shortest distances via Floyd-Warshall, tolerating
/// negative edge weights. Detects a negative cycle (a vertex `v` whose
/// shortest "path" to itself becomes negative) and reports
/// `NegativeCycle` rather than returning undefined distances.
pub struct AllPairsResult {
    dist: Vec<Vec<f64>>,
    edge_to: Vec<Vec<Option<usize>>>,
}

impl AllPairsResult {
    pub fn dist(&self, from: usize, to: usize) -> f64 {
        self.dist[from][to]
    }

    pub fn has_path(&self, from: usize, to: usize) -> bool {
        self.dist[from][to].is_finite()
    }

    /// Vertices on the shortest path from `from` to `to`, in order.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if !self.has_path(from, to) {
            return None;
        }
        let mut path = vec![to];
        let mut cur = to;
        while cur != from {
            let prev = self.edge_to[from][cur]?;
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

pub fn floyd_warshall(g: &AdjMatrixEWDigraph) -> LatticeResult<AllPairsResult> {
    let n = g.vertex_count();
    let mut dist: Vec<Vec<f64>> = (0..n).map(|i| (0..n).map(|j| g.weight(i, j)).collect()).collect();
    let mut edge_to: Vec<Vec<Option<usize>>> = (0..n)
        .map(|i| (0..n).map(|j| if i != j && g.has_edge(i, j) { Some(i) } else { None }).collect())
        .collect();

    for k in 0..n {
        for i in 0..n {
            if !dist[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                if !dist[k][j].is_finite() {
                    continue;
                }
                let via_k = dist[i][k] + dist[k][j];
                if via_k < dist[i][j] {
                    dist[i][j] = via_k;
                    edge_to[i][j] = edge_to[k][j];
                }
            }
        }
    }

    for v in 0..n {
        if dist[v][v] < 0.0 {
            return Err(LatticeError::NegativeCycle);
        }
    }

    Ok(AllPairsResult { dist, edge_to })
}
