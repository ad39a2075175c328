// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Randomized and named-topology graph/digraph builders, used as test
//! and benchmark fixtures so callers don't have to hand-write adjacency
//! lists to exercise the rest of the library.

use std::collections::HashSet;

use super::digraph::Digraph;
use super::undirected::Graph;
use crate::common::rng::RandomSource;

fn random_pair(rng: &mut RandomSource, v: usize) -> (usize, usize) {
    (rng.gen_range(0, v), rng.gen_range(0, v))
}

/// A uniformly random simple graph (no self-loops, no parallel edges)
/// with `v` vertices and `e` edges. Panics if `e` exceeds the number of
/// distinct unordered pairs available.
pub fn simple(v: usize, e: usize, rng: &mut RandomSource) -> Graph {
    assert!(e <= v * (v.saturating_sub(1)) / 2, "too many edges for a simple graph");
    let mut g = Graph::new(v);
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    while g.edge_count() < e {
        let (a, b) = random_pair(rng, v);
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        if seen.insert(key) {
            g.add_edge(a, b).unwrap();
        }
    }
    g
}

/// A uniformly random simple digraph with `v` vertices and `e` edges.
pub fn simple_digraph(v: usize, e: usize, rng: &mut RandomSource) -> Digraph {
    assert!(e <= v * v.saturating_sub(1), "too many edges for a simple digraph");
    let mut g = Digraph::new(v);
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    while g.edge_count() < e {
        let (a, b) = random_pair(rng, v);
        if a == b {
            continue;
        }
        if seen.insert((a, b)) {
            g.add_edge(a, b).unwrap();
        }
    }
    g
}

/// The complete graph on `v` vertices.
pub fn complete(v: usize) -> Graph {
    let mut g = Graph::new(v);
    for i in 0..v {
        for j in (i + 1)..v {
            g.add_edge(i, j).unwrap();
        }
    }
    g
}

/// The complete digraph on `v` vertices (both `i -> j` and `j -> i` for
/// every pair).
pub fn complete_digraph(v: usize) -> Digraph {
    let mut g = Digraph::new(v);
    for i in 0..v {
        for j in 0..v {
            if i != j {
                g.add_edge(i, j).unwrap();
            }
        }
    }
    g
}

/// A random bipartite graph between a `v1`-vertex side (indices
/// `0..v1`) and a `v2`-vertex side (indices `v1..v1+v2`), with `e`
/// edges crossing between the two sides.
pub fn bipartite(v1: usize, v2: usize, e: usize, rng: &mut RandomSource) -> Graph {
    assert!(e <= v1 * v2, "too many edges for this bipartition");
    let mut g = Graph::new(v1 + v2);
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    while g.edge_count() < e {
        let a = rng.gen_range(0, v1);
        let b = v1 + rng.gen_range(0, v2);
        if seen.insert((a, b)) {
            g.add_edge(a, b).unwrap();
        }
    }
    g
}

/// The path `0 - 1 - 2 - ... - (v-1)`.
pub fn path(v: usize) -> Graph {
    let mut g = Graph::new(v);
    for i in 0..v.saturating_sub(1) {
        g.add_edge(i, i + 1).unwrap();
    }
    g
}

/// The cycle `0 - 1 - ... - (v-1) - 0`.
pub fn cycle(v: usize) -> Graph {
    let mut g = path(v);
    if v >= 3 {
        g.add_edge(v - 1, 0).unwrap();
    }
    g
}

/// A complete binary tree on `v` vertices, parent of `i` is `(i-1)/2`.
pub fn binary_tree(v: usize) -> Graph {
    let mut g = Graph::new(v);
    for i in 1..v {
        g.add_edge(i, (i - 1) / 2).unwrap();
    }
    g
}

/// The star with center `0` and `v-1` leaves.
pub fn star(v: usize) -> Graph {
    let mut g = Graph::new(v);
    for i in 1..v {
        g.add_edge(0, i).unwrap();
    }
    g
}

/// A cycle `1..v` with a hub vertex `0` connected to every rim vertex.
pub fn wheel(v: usize) -> Graph {
    let mut g = Graph::new(v);
    if v < 2 {
        return g;
    }
    for i in 1..v {
        g.add_edge(0, i).unwrap();
    }
    for i in 1..v {
        let next = if i + 1 == v { 1 } else { i + 1 };
        if v > 2 {
            g.add_edge(i, next).unwrap();
        }
    }
    g
}

/// A uniformly random labeled tree on `v` vertices, built from a random
/// Prüfer sequence (length `v - 2`) — every labeled tree on `v`
/// vertices corresponds to exactly one Prüfer sequence, so sampling the
/// sequence uniformly samples the tree uniformly.
pub fn tree(v: usize, rng: &mut RandomSource) -> Graph {
    let mut g = Graph::new(v);
    if v <= 1 {
        return g;
    }
    if v == 2 {
        g.add_edge(0, 1).unwrap();
        return g;
    }
    let seq: Vec<usize> = (0..(v - 2)).map(|_| rng.gen_range(0, v)).collect();
    let mut degree = vec![1usize; v];
    for &s in &seq {
        degree[s] += 1;
    }
    let mut leaves: std::collections::BinaryHeap<std::cmp::Reverse<usize>> = (0..v)
        .filter(|&i| degree[i] == 1)
        .map(std::cmp::Reverse)
        .collect();
    for &s in &seq {
        let std::cmp::Reverse(leaf) = leaves.pop().unwrap();
        g.add_edge(leaf, s).unwrap();
        degree[leaf] -= 1;
        degree[s] -= 1;
        if degree[s] == 1 {
            leaves.push(std::cmp::Reverse(s));
        }
    }
    let std::cmp::Reverse(a) = leaves.pop().unwrap();
    let std::cmp::Reverse(b) = leaves.pop().unwrap();
    g.add_edge(a, b).unwrap();
    g
}

/// A random `k`-regular graph on `v` vertices (requires `v * k` even),
/// built by repeatedly pairing up half-edges ("stub matching") and
/// retrying on collision.
pub fn regular(v: usize, k: usize, rng: &mut RandomSource) -> Graph {
    assert!((v * k) % 2 == 0, "v * k must be even for a k-regular graph");
    loop {
        let mut stubs = Vec::with_capacity(v * k);
        for vertex in 0..v {
            for _ in 0..k {
                stubs.push(vertex);
            }
        }
        for i in (1..stubs.len()).rev() {
            let j = rng.gen_range(0, i + 1);
            stubs.swap(i, j);
        }
        let mut g = Graph::new(v);
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut ok = true;
        for pair in stubs.chunks(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                ok = false;
                break;
            }
            g.add_edge(a, b).unwrap();
        }
        if ok {
            return g;
        }
    }
}

/// A random DAG: `e` edges, each drawn between two distinct vertices and
/// oriented from the lower-ranked endpoint to the higher-ranked one
/// under a random permutation, so no cycle can ever form.
pub fn random_dag(v: usize, e: usize, rng: &mut RandomSource) -> Digraph {
    let mut rank: Vec<usize> = (0..v).collect();
    for i in (1..v).rev() {
        let j = rng.gen_range(0, i + 1);
        rank.swap(i, j);
    }
    let mut g = Digraph::new(v);
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut attempts = 0;
    while g.edge_count() < e && attempts < e * 50 + 1000 {
        attempts += 1;
        let (a, b) = random_pair(rng, v);
        if rank[a] == rank[b] {
            continue;
        }
        let (lo, hi) = if rank[a] < rank[b] { (a, b) } else { (b, a) };
        if seen.insert((lo, hi)) {
            g.add_edge(lo, hi).unwrap();
        }
    }
    g
}

/// A digraph with exactly `c` strongly connected components: `v`
/// vertices are split into `c` contiguous groups, each wired into a
/// single cycle (so every vertex in a group reaches every other), and
/// `e` additional forward-only edges are scattered between groups in
/// rank order so no edge ever merges two components.
pub fn strong(v: usize, e: usize, c: usize, rng: &mut RandomSource) -> Digraph {
    assert!(c >= 1 && c <= v.max(1), "component count must be between 1 and v");
    let mut g = Digraph::new(v);
    let mut group_of = vec![0usize; v];
    let base = v / c;
    let mut start = 0;
    let mut group_ranges = Vec::with_capacity(c);
    for group in 0..c {
        let size = if group == c - 1 { v - start } else { base.max(1) };
        let end = (start + size).min(v);
        for vertex in start..end {
            group_of[vertex] = group;
        }
        group_ranges.push((start, end));
        if end > start + 1 {
            for i in start..(end - 1) {
                g.add_edge(i, i + 1).unwrap();
            }
            g.add_edge(end - 1, start).unwrap();
        }
        start = end;
    }
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut attempts = 0;
    while g.edge_count() < group_ranges.iter().filter(|(s, e)| e > s).count() + e
        && attempts < e * 50 + 1000
    {
        attempts += 1;
        let (a, b) = random_pair(rng, v);
        if group_of[a] >= group_of[b] {
            continue;
        }
        if seen.insert((a, b)) {
            g.add_edge(a, b).unwrap();
        }
    }
    g
}

/// A graph guaranteed to admit an Euler circuit: every vertex gets even
/// degree by construction, built as a union of `e`-ish random cycles
/// through the vertex set.
pub fn eulerian_cycle(v: usize, e: usize, rng: &mut RandomSource) -> Graph {
    assert!(v >= 3, "an Euler circuit needs at least 3 vertices");
    let mut g = Graph::new(v);
    let count = e.max(v);
    let mut order: Vec<usize> = (0..v).collect();
    for i in (1..v).rev() {
        let j = rng.gen_range(0, i + 1);
        order.swap(i, j);
    }
    for i in 0..count {
        let a = order[i % v];
        let b = order[(i + 1) % v];
        g.add_edge(a, b).unwrap();
    }
    g
}

/// A graph guaranteed to admit an Euler trail (exactly two odd-degree
/// vertices, or zero): an Euler-circuit fixture with one extra edge
/// appended between its first two vertices to break the parity of
/// exactly those two.
pub fn eulerian_path(v: usize, e: usize, rng: &mut RandomSource) -> Graph {
    let mut g = eulerian_cycle(v, e, rng);
    if v >= 2 {
        g.add_edge(0, 1).unwrap();
    }
    g
}
