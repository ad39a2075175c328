// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Bipartiteness, maximum matching, and minimum vertex cover on
//! undirected graphs.
//!
//! [`two_color`] detects bipartiteness with a BFS 2-coloring.
//! [`hopcroft_karp`] finds a maximum matching between the two color
//! classes in `O(E sqrt(V))` via repeated phases of shortest
//! augmenting-path search (BFS layering, then DFS along admissible
//! edges). [`min_vertex_cover`] derives a minimum vertex cover from a
//! maximum matching via König's theorem: alternate from every
//! unmatched left vertex, the cover is (unvisited left) union (visited
//! right).

use std::collections::VecDeque;

use super::undirected::Graph;
use crate::error::{LatticeError, LatticeResult};

/// A 2-coloring of a connected-or-not graph, or the detection that none
/// exists.
pub struct Coloring {
    color: Vec<Option<bool>>,
}

impl Coloring {
    pub fn color_of(&self, v: usize) -> Option<bool> {
        self.color[v]
    }
}

/// Attempt a 2-coloring of `g` via BFS, one component at a time.
/// Returns `Err(NotBipartite)` as soon as an edge would connect two
/// same-colored vertices.
pub fn two_color(g: &Graph) -> LatticeResult<Coloring> {
    let n = g.vertex_count();
    let mut color: Vec<Option<bool>> = vec![None; n];
    for s in 0..n {
        if color[s].is_some() {
            continue;
        }
        color[s] = Some(false);
        let mut queue = VecDeque::from([s]);
        while let Some(v) = queue.pop_front() {
            for &w in g.adj(v) {
                if w == v {
                    return Err(LatticeError::NotBipartite);
                }
                match color[w] {
                    None => {
                        color[w] = Some(!color[v].unwrap());
                        queue.push_back(w);
                    }
                    Some(cw) if cw == color[v].unwrap() => return Err(LatticeError::NotBipartite),
                    _ => {}
                }
            }
        }
    }
    Ok(Coloring { color })
}

/// A maximum matching: `mate[v] == Some(w)` iff `v` and `w` are matched
/// to each other.
pub struct Matching {
    mate: Vec<Option<usize>>,
}

impl Matching {
    pub fn mate_of(&self, v: usize) -> Option<usize> {
        self.mate[v]
    }

    pub fn size(&self) -> usize {
        self.mate.iter().filter(|m| m.is_some()).count() / 2
    }
}

const NIL: usize = usize::MAX;

/// Maximum matching via Hopcroft-Karp. `left` is the color-0 side;
/// matching edges are only sought between `left` and its complement.
pub fn hopcroft_karp(g: &Graph, coloring: &Coloring) -> Matching {
    let n = g.vertex_count();
    let left: Vec<usize> = (0..n).filter(|&v| coloring.color_of(v) == Some(false)).collect();
    let mut mate = vec![NIL; n];
    let mut dist = vec![0usize; n];

    loop {
        if !bfs_layer(g, &left, &mut mate, &mut dist) {
            break;
        }
        for &v in &left {
            if mate[v] == NIL {
                dfs_augment(g, v, &mut mate, &mut dist);
            }
        }
    }

    Matching {
        mate: mate
            .into_iter()
            .map(|m| if m == NIL { None } else { Some(m) })
            .collect(),
    }
}

fn bfs_layer(g: &Graph, left: &[usize], mate: &mut [usize], dist: &mut [usize]) -> bool {
    let mut queue = VecDeque::new();
    for &v in left {
        if mate[v] == NIL {
            dist[v] = 0;
            queue.push_back(v);
        } else {
            dist[v] = usize::MAX;
        }
    }
    let mut found_augmenting = false;
    while let Some(v) = queue.pop_front() {
        for &w in g.adj(v) {
            let u = mate[w];
            if u == NIL {
                found_augmenting = true;
            } else if dist[u] == usize::MAX {
                dist[u] = dist[v] + 1;
                queue.push_back(u);
            }
        }
    }
    found_augmenting
}

fn dfs_augment(g: &Graph, v: usize, mate: &mut [usize], dist: &mut [usize]) -> bool {
    for i in 0..g.adj(v).len() {
        let w = g.adj(v)[i];
        let u = mate[w];
        if u == NIL || (dist[u] == dist[v] + 1 && dfs_augment(g, u, mate, dist)) {
            mate[v] = w;
            mate[w] = v;
            return true;
        }
    }
    dist[v] = usize::MAX;
    false
}

/// A minimum vertex cover, derived from a maximum matching via König's
/// theorem.
pub fn min_vertex_cover(g: &Graph, coloring: &Coloring, matching: &Matching) -> Vec<usize> {
    let n = g.vertex_count();
    let left: Vec<usize> = (0..n).filter(|&v| coloring.color_of(v) == Some(false)).collect();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    for &v in &left {
        if matching.mate_of(v).is_none() {
            visited[v] = true;
            queue.push_back(v);
        }
    }
    while let Some(v) = queue.pop_front() {
        for &w in g.adj(v) {
            if !visited[w] {
                visited[w] = true;
                if let Some(u) = matching.mate_of(w) {
                    if !visited[u] {
                        visited[u] = true;
                        queue.push_back(u);
                    }
                }
            }
        }
    }
    left.iter()
        .copied()
        .filter(|&v| !visited[v])
        .chain((0..n).filter(|&v| coloring.color_of(v) == Some(true) && visited[v]))
        .collect()
}
