// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Breadth-first and depth-first traversal, cycle detection, and
//! topological sort (both Kahn's algorithm and reverse-postorder DFS)
//! over [`Digraph`] and [`Graph`].

use std::collections::VecDeque;

use super::digraph::Digraph;
use super::undirected::Graph;

/// The result of a breadth-first search from a single source: every
/// reachable vertex's distance (in edges) from the source, and the
/// edge used to first reach it (for path reconstruction).
pub struct BfsResult {
    dist_to: Vec<Option<usize>>,
    edge_to: Vec<Option<usize>>,
}

impl BfsResult {
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v].is_some()
    }

    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }

    /// Vertices on the shortest (fewest-edges) path from the source to
    /// `v`, inclusive of both endpoints.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.dist_to[v]?;
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

pub fn bfs_digraph(g: &Digraph, source: usize) -> BfsResult {
    let n = g.vertex_count();
    let mut dist_to = vec![None; n];
    let mut edge_to = vec![None; n];
    dist_to[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        for &w in g.adj(v) {
            if dist_to[w].is_none() {
                dist_to[w] = Some(dist_to[v].unwrap() + 1);
                edge_to[w] = Some(v);
                queue.push_back(w);
            }
        }
    }
    BfsResult { dist_to, edge_to }
}

pub fn bfs_graph(g: &Graph, source: usize) -> BfsResult {
    let n = g.vertex_count();
    let mut dist_to = vec![None; n];
    let mut edge_to = vec![None; n];
    dist_to[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        for &w in g.adj(v) {
            if dist_to[w].is_none() {
                dist_to[w] = Some(dist_to[v].unwrap() + 1);
                edge_to[w] = Some(v);
                queue.push_back(w);
            }
        }
    }
    BfsResult { dist_to, edge_to }
}

/// Depth-first reachability from a single source.
pub fn dfs_digraph_reachable(g: &Digraph, source: usize) -> Vec<bool> {
    let mut marked = vec![false; g.vertex_count()];
    let mut stack = vec![source];
    marked[source] = true;
    while let Some(v) = stack.pop() {
        for &w in g.adj(v) {
            if !marked[w] {
                marked[w] = true;
                stack.push(w);
            }
        }
    }
    marked
}

pub fn dfs_graph_reachable(g: &Graph, source: usize) -> Vec<bool> {
    let mut marked = vec![false; g.vertex_count()];
    let mut stack = vec![source];
    marked[source] = true;
    while let Some(v) = stack.pop() {
        for &w in g.adj(v) {
            if !marked[w] {
                marked[w] = true;
                stack.push(w);
            }
        }
    }
    marked
}

/// Whether `g` contains a directed cycle, found via a recursive DFS
/// that tracks the current recursion stack (`on_stack`) — a
/// back-edge into a vertex still on the stack is a cycle.
pub fn has_cycle_digraph(g: &Digraph) -> bool {
    let n = g.vertex_count();
    let mut marked = vec![false; n];
    let mut on_stack = vec![false; n];
    for v in 0..n {
        if !marked[v] && dfs_cycle_check(g, v, &mut marked, &mut on_stack) {
            return true;
        }
    }
    false
}

fn dfs_cycle_check(g: &Digraph, v: usize, marked: &mut [bool], on_stack: &mut [bool]) -> bool {
    marked[v] = true;
    on_stack[v] = true;
    for &w in g.adj(v) {
        if !marked[w] {
            if dfs_cycle_check(g, w, marked, on_stack) {
                return true;
            }
        } else if on_stack[w] {
            return true;
        }
    }
    on_stack[v] = false;
    false
}

/// Whether `g` contains a cycle (any edge to an already-visited vertex
/// other than the one just arrived from counts, since an undirected
/// edge is traversed from both endpoints).
pub fn has_cycle_graph(g: &Graph) -> bool {
    let n = g.vertex_count();
    let mut marked = vec![false; n];
    for v in 0..n {
        if !marked[v] && dfs_cycle_check_undirected(g, v, usize::MAX, &mut marked) {
            return true;
        }
    }
    false
}

fn dfs_cycle_check_undirected(g: &Graph, v: usize, parent: usize, marked: &mut [bool]) -> bool {
    marked[v] = true;
    for &w in g.adj(v) {
        if !marked[w] {
            if dfs_cycle_check_undirected(g, w, v, marked) {
                return true;
            }
        } else if w != parent {
            return true;
        }
    }
    false
}

/// Topological order via Kahn's algorithm (repeatedly peel off
/// zero-indegree vertices). Returns `None` if `g` has a cycle.
pub fn topological_sort_kahn(g: &Digraph) -> Option<Vec<usize>> {
    let n = g.vertex_count();
    let mut indeg: Vec<usize> = (0..n).map(|v| g.indegree(v)).collect();
    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indeg[v] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &w in g.adj(v) {
            indeg[w] -= 1;
            if indeg[w] == 0 {
                queue.push_back(w);
            }
        }
    }
    if order.len() == n {
        Some(order)
    } else {
        None
    }
}

/// Topological order via the reverse of a DFS postorder. Returns
/// `None` if `g` has a cycle.
pub fn topological_sort_dfs(g: &Digraph) -> Option<Vec<usize>> {
    if has_cycle_digraph(g) {
        return None;
    }
    let n = g.vertex_count();
    let mut marked = vec![false; n];
    let mut postorder = Vec::with_capacity(n);
    for v in 0..n {
        if !marked[v] {
            dfs_postorder(g, v, &mut marked, &mut postorder);
        }
    }
    postorder.reverse();
    Some(postorder)
}

fn dfs_postorder(g: &Digraph, v: usize, marked: &mut [bool], postorder: &mut Vec<usize>) {
    marked[v] = true;
    for &w in g.adj(v) {
        if !marked[w] {
            dfs_postorder(g, w, marked, postorder);
        }
    }
    postorder.push(v);
}
