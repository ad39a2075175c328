// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios exercising one whole module at a time through
//! its public API, as opposed to the per-module unit tests living
//! alongside each `src/**/*.rs`.

use corelattice::collections::SkipList;
use corelattice::graph::{bipartite, dijkstra, ewgraph::EdgeWeightedDigraph, topological_sort_dfs, topological_sort_kahn, Digraph, Graph};
use corelattice::regex::Nfa;
use corelattice::unionfind::UnionFind;

#[test]
fn scenario_skip_list_min_max_floor_ceiling() {
    let mut list = SkipList::new();
    for key in ["aaa", "bbb", "ccc"] {
        list.put(key.to_string());
    }
    assert_eq!(list.min(), Some(&"aaa".to_string()));
    assert_eq!(list.max(), Some(&"ccc".to_string()));
    assert_eq!(list.floor(&"bca".to_string()), Some(&"bbb".to_string()));
    assert_eq!(list.ceiling(&"bca".to_string()), Some(&"ccc".to_string()));
}

#[test]
fn scenario_union_find_component_count_and_connectivity() {
    let mut uf = UnionFind::new(10);
    for (p, q) in [(0, 1), (2, 3), (1, 3), (4, 5)] {
        uf.union(p, q).unwrap();
    }
    assert_eq!(uf.count(), 6);
    assert!(uf.connected(0, 3).unwrap());
    assert!(!uf.connected(0, 4).unwrap());
}

#[test]
fn scenario_dijkstra_distance_and_path_reconstruction() {
    let mut g = EdgeWeightedDigraph::new(3);
    g.add_edge(0, 1, 0.5).unwrap();
    g.add_edge(1, 2, 0.5).unwrap();
    g.add_edge(0, 2, 2.0).unwrap();

    let sssp = dijkstra(&g, 0).unwrap();
    assert_eq!(sssp.dist_to(2), 1.0);
    assert_eq!(sssp.path_to(2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn scenario_topological_order_is_valid_under_both_algorithms() {
    let mut g = Digraph::new(6);
    for (v, w) in [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)] {
        g.add_edge(v, w).unwrap();
    }

    for order in [topological_sort_kahn(&g).unwrap(), topological_sort_dfs(&g).unwrap()] {
        assert_eq!(order.len(), 6);
        let mut rank = [0usize; 6];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        for v in 0..6 {
            for &w in g.adj(v) {
                assert!(rank[v] < rank[w]);
            }
        }
    }
}

#[test]
fn scenario_nfa_alternation_and_closure_pattern() {
    let nfa = Nfa::from_pattern("(A|B)*C").unwrap();
    assert!(nfa.matches("AABC").unwrap());
    assert!(nfa.matches("C").unwrap());
    assert!(nfa.matches("BBBBC").unwrap());
    assert!(!nfa.matches("ABBA").unwrap());
    assert!(!nfa.matches("").unwrap());
}

#[test]
fn scenario_hopcroft_karp_matching_cardinality_and_coverage() {
    let mut g = Graph::new(6);
    for (l, r) in [(0, 3), (0, 4), (1, 3), (2, 4), (2, 5)] {
        g.add_edge(l, r).unwrap();
    }
    let coloring = bipartite::two_color(&g).unwrap();
    let matching = bipartite::hopcroft_karp(&g, &coloring);
    assert_eq!(matching.size(), 3);
    for v in 0..6 {
        assert!(matching.mate_of(v).is_some());
    }
}
