// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Euler circuit/trail construction via Hierholzer's algorithm:
//! maintain a stack of vertices, always extending the top by an unused
//! incident edge; when a vertex runs out of usable edges, pop it onto
//! the answer. The popped sequence, reversed, is a closed walk using
//! every edge exactly once.

use super::digraph::Digraph;
use super::undirected::Graph;

/// Reconstruct a global edge id for every adjacency-list slot of `g`,
/// so a self-loop or a parallel edge (which each occupy two otherwise
/// indistinguishable slots) can still be marked "used" unambiguously.
/// Returns, per vertex, a parallel `(neighbor, edge_id)` list.
fn edge_ids(g: &Graph) -> (Vec<Vec<(usize, usize)>>, usize) {
    let n = g.vertex_count();
    let mut claimed: Vec<Vec<bool>> = g.adj_lens().into_iter().map(|len| vec![false; len]).collect();
    let mut id_of: Vec<Vec<usize>> = g.adj_lens().into_iter().map(|len| vec![0; len]).collect();
    let mut next_id = 0;

    for v in 0..n {
        for i in 0..g.adj(v).len() {
            if claimed[v][i] {
                continue;
            }
            let w = g.adj(v)[i];
            let id = next_id;
            next_id += 1;
            claimed[v][i] = true;
            id_of[v][i] = id;
            if w == v {
                // self-loop: find the other unclaimed slot equal to v.
                let j = ((i + 1)..g.adj(v).len()).find(|&j| !claimed[v][j] && g.adj(v)[j] == v).unwrap();
                claimed[v][j] = true;
                id_of[v][j] = id;
            } else {
                let j = (0..g.adj(w).len()).find(|&j| !claimed[w][j] && g.adj(w)[j] == v).unwrap();
                claimed[w][j] = true;
                id_of[w][j] = id;
            }
        }
    }

    let adj_with_ids: Vec<Vec<(usize, usize)>> = (0..n)
        .map(|v| g.adj(v).iter().zip(id_of[v].iter()).map(|(&w, &id)| (w, id)).collect())
        .collect();
    (adj_with_ids, next_id)
}

fn walk_from(adj: &[Vec<(usize, usize)>], edge_count: usize, start: usize) -> Vec<usize> {
    let mut used = vec![false; edge_count];
    let mut next_slot = vec![0usize; adj.len()];
    let mut stack = vec![start];
    let mut circuit = Vec::new();
    while let Some(&v) = stack.last() {
        let mut advanced = false;
        while next_slot[v] < adj[v].len() {
            let (w, id) = adj[v][next_slot[v]];
            next_slot[v] += 1;
            if !used[id] {
                used[id] = true;
                stack.push(w);
                advanced = true;
                break;
            }
        }
        if !advanced {
            circuit.push(stack.pop().unwrap());
        }
    }
    circuit.reverse();
    circuit
}

/// An Euler circuit (closed walk using every edge exactly once),
/// requiring every vertex to have even degree and the graph to be
/// connected (ignoring isolated vertices). Returns `None` if no
/// circuit exists.
pub fn eulerian_circuit(g: &Graph) -> Option<Vec<usize>> {
    if g.edge_count() == 0 {
        return None;
    }
    for v in 0..g.vertex_count() {
        if g.degree(v) % 2 != 0 {
            return None;
        }
    }
    let start = (0..g.vertex_count()).find(|&v| g.degree(v) > 0)?;
    let (adj, edge_count) = edge_ids(g);
    let circuit = walk_from(&adj, edge_count, start);
    if circuit.len() == edge_count + 1 {
        Some(circuit)
    } else {
        None
    }
}

/// An Euler trail (open walk using every edge exactly once), requiring
/// exactly zero or two odd-degree vertices. Returns `None` if no trail
/// exists.
pub fn eulerian_trail(g: &Graph) -> Option<Vec<usize>> {
    if g.edge_count() == 0 {
        return None;
    }
    let odd: Vec<usize> = (0..g.vertex_count()).filter(|&v| g.degree(v) % 2 != 0).collect();
    let start = match odd.len() {
        0 => (0..g.vertex_count()).find(|&v| g.degree(v) > 0)?,
        2 => odd[0],
        _ => return None,
    };
    let (adj, edge_count) = edge_ids(g);
    let trail = walk_from(&adj, edge_count, start);
    if trail.len() == edge_count + 1 {
        Some(trail)
    } else {
        None
    }
}

/// Directed adjacency has no shared-slot ambiguity: every occurrence
/// of `w` in `adj(v)` is already its own distinct outgoing edge, so
/// the edge id is just that slot's position.
fn directed_edge_ids(g: &Digraph) -> (Vec<Vec<(usize, usize)>>, usize) {
    let n = g.vertex_count();
    let mut next_id = 0;
    let adj_with_ids: Vec<Vec<(usize, usize)>> = (0..n)
        .map(|v| {
            g.adj(v)
                .iter()
                .map(|&w| {
                    let id = next_id;
                    next_id += 1;
                    (w, id)
                })
                .collect()
        })
        .collect();
    (adj_with_ids, next_id)
}

/// An Euler circuit on a digraph, requiring indegree == outdegree at
/// every vertex.
pub fn eulerian_circuit_digraph(g: &Digraph) -> Option<Vec<usize>> {
    if g.edge_count() == 0 {
        return None;
    }
    for v in 0..g.vertex_count() {
        if g.indegree(v) != g.outdegree(v) {
            return None;
        }
    }
    let start = (0..g.vertex_count()).find(|&v| g.outdegree(v) > 0)?;
    let (adj, edge_count) = directed_edge_ids(g);
    let circuit = walk_from(&adj, edge_count, start);
    if circuit.len() == edge_count + 1 {
        Some(circuit)
    } else {
        None
    }
}

/// An Euler trail on a digraph, requiring exactly one vertex with
/// `outdegree - indegree == 1` (the start) and exactly one with
/// `indegree - outdegree == 1` (the end), every other vertex balanced.
pub fn eulerian_trail_digraph(g: &Digraph) -> Option<Vec<usize>> {
    if g.edge_count() == 0 {
        return None;
    }
    let mut start_candidate = None;
    let mut end_candidate = None;
    for v in 0..g.vertex_count() {
        let out = g.outdegree(v) as i64;
        let indeg = g.indegree(v) as i64;
        match out - indeg {
            0 => {}
            1 => {
                if start_candidate.is_some() {
                    return None;
                }
                start_candidate = Some(v);
            }
            -1 => {
                if end_candidate.is_some() {
                    return None;
                }
                end_candidate = Some(v);
            }
            _ => return None,
        }
    }
    let start = match (start_candidate, end_candidate) {
        (Some(s), Some(_)) => s,
        (None, None) => (0..g.vertex_count()).find(|&v| g.outdegree(v) > 0)?,
        _ => return None,
    };
    let (adj, edge_count) = directed_edge_ids(g);
    let trail = walk_from(&adj, edge_count, start);
    if trail.len() == edge_count + 1 {
        Some(trail)
    } else {
        None
    }
}
