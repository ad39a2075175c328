// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Graph representations and algorithms: directed and undirected
//! adjacency-list graphs, edge-weighted variants, a name-addressed
//! symbol digraph, random fixture generators, traversal and cycle
//! detection, Euler circuits/trails, strongly connected components,
//! bipartite matching, minimum spanning trees, and shortest paths.

pub mod bipartite;
pub mod digraph;
pub mod euler;
pub mod ewgraph;
pub mod generators;
pub mod mst;
pub mod scc;
pub mod shortest_paths;
pub mod symbol;
pub mod traversal;
pub mod undirected;

#[cfg(test)]
mod shortest_paths_test;
#[cfg(test)]
mod symbol_test;

pub use bipartite::{hopcroft_karp, min_vertex_cover, two_color, Coloring, Matching};
pub use digraph::Digraph;
pub use euler::{eulerian_circuit, eulerian_circuit_digraph, eulerian_trail, eulerian_trail_digraph};
pub use ewgraph::{AdjMatrixEWDigraph, Edge, EdgeWeightedDigraph, EdgeWeightedGraph};
pub use generators::{
    bipartite, binary_tree, complete, complete_digraph, cycle, eulerian_cycle, eulerian_path,
    path, random_dag, regular, simple, simple_digraph, star, strong, tree, wheel,
};
pub use mst::{boruvka, MstResult};
pub use scc::{gabow, kosaraju_sharir, SccResult};
pub use shortest_paths::{dijkstra, dijkstra_all_pairs, floyd_warshall, AllPairsResult, SsspResult};
pub use symbol::SymbolDigraph;
pub use traversal::{
    bfs_digraph, bfs_graph, dfs_digraph_reachable, dfs_graph_reachable, has_cycle_digraph,
    has_cycle_graph, topological_sort_dfs, topological_sort_kahn, BfsResult,
};
pub use undirected::Graph;
