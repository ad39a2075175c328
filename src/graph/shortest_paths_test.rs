// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::graph::ewgraph::{AdjMatrixEWDigraph, EdgeWeightedDigraph};

fn sample_digraph() -> EdgeWeightedDigraph {
    let mut g = EdgeWeightedDigraph::new(5);
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(0, 2, 4.0).unwrap();
    g.add_edge(1, 2, 2.0).unwrap();
    g.add_edge(1, 3, 6.0).unwrap();
    g.add_edge(2, 3, 1.0).unwrap();
    g.add_edge(3, 4, 1.0).unwrap();
    g
}

#[test]
fn test_dijkstra_finds_shortest_distances() {
    let g = sample_digraph();
    let sssp = dijkstra(&g, 0).unwrap();
    assert_eq!(sssp.dist_to(0), 0.0);
    assert_eq!(sssp.dist_to(1), 1.0);
    assert_eq!(sssp.dist_to(2), 3.0);
    assert_eq!(sssp.dist_to(3), 4.0);
    assert_eq!(sssp.dist_to(4), 5.0);
}

#[test]
fn test_dijkstra_reconstructs_path() {
    let g = sample_digraph();
    let sssp = dijkstra(&g, 0).unwrap();
    let path = sssp.path_to(4).unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&4));
    assert_eq!(path, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_dijkstra_unreachable_vertex_has_no_path() {
    let mut g = EdgeWeightedDigraph::new(3);
    g.add_edge(0, 1, 1.0).unwrap();
    let sssp = dijkstra(&g, 0).unwrap();
    assert!(!sssp.has_path_to(2));
    assert!(sssp.path_to(2).is_none());
}

#[test]
fn test_dijkstra_rejects_negative_edge_weight() {
    let mut g = EdgeWeightedDigraph::new(2);
    g.add_edge(0, 1, -3.0).unwrap();
    let err = dijkstra(&g, 0).unwrap_err();
    assert_eq!(
        err,
        crate::error::LatticeError::NegativeEdgeWeight {
            from: 0,
            to: 1,
            weight: -3.0
        }
    );
}

#[test]
fn test_dijkstra_all_pairs_is_symmetric_with_floyd_warshall() {
    let g = sample_digraph();
    let all_sssp = dijkstra_all_pairs(&g).unwrap();

    let mut matrix = AdjMatrixEWDigraph::new(5);
    for e in g.edges() {
        matrix.add_edge(e.from, e.to, e.weight).unwrap();
    }
    let fw = floyd_warshall(&matrix).unwrap();

    for v in 0..5 {
        for w in 0..5 {
            let a = all_sssp[v].dist_to(w);
            let b = fw.dist(v, w);
            assert!((a - b).abs() < 1e-9 || (!a.is_finite() && !b.is_finite()));
        }
    }
}

#[test]
fn test_floyd_warshall_tolerates_negative_edge_without_cycle() {
    let mut matrix = AdjMatrixEWDigraph::new(3);
    matrix.add_edge(0, 1, 1.0).unwrap();
    matrix.add_edge(1, 2, -2.0).unwrap();
    let fw = floyd_warshall(&matrix).unwrap();
    assert!((fw.dist(0, 2) - (-1.0)).abs() < 1e-9);
}

#[test]
fn test_floyd_warshall_reconstructs_path() {
    let mut matrix = AdjMatrixEWDigraph::new(5);
    let g = sample_digraph();
    for e in g.edges() {
        matrix.add_edge(e.from, e.to, e.weight).unwrap();
    }
    let fw = floyd_warshall(&matrix).unwrap();
    let path = fw.path(0, 4).unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&4));
    assert_eq!(path, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_floyd_warshall_path_is_none_when_unreachable() {
    let mut matrix = AdjMatrixEWDigraph::new(3);
    matrix.add_edge(0, 1, 1.0).unwrap();
    let fw = floyd_warshall(&matrix).unwrap();
    assert!(fw.path(0, 2).is_none());
}

#[test]
fn test_floyd_warshall_path_to_self_is_single_vertex() {
    let mut matrix = AdjMatrixEWDigraph::new(2);
    matrix.add_edge(0, 1, 1.0).unwrap();
    let fw = floyd_warshall(&matrix).unwrap();
    assert_eq!(fw.path(0, 0), Some(vec![0]));
}

#[test]
fn test_floyd_warshall_detects_negative_cycle() {
    let mut matrix = AdjMatrixEWDigraph::new(3);
    matrix.add_edge(0, 1, 1.0).unwrap();
    matrix.add_edge(1, 2, -3.0).unwrap();
    matrix.add_edge(2, 0, 1.0).unwrap();
    assert_eq!(floyd_warshall(&matrix).unwrap_err(), crate::error::LatticeError::NegativeCycle);
}
