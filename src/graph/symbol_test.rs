// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_names_are_assigned_indices_on_first_use() {
    let mut sg = SymbolDigraph::new();
    sg.add_edge("Atlanta", "Chicago");
    sg.add_edge("Chicago", "Denver");
    assert!(sg.contains("Atlanta"));
    assert!(!sg.contains("Seattle"));
    assert_eq!(sg.index_of("Atlanta"), Some(0));
    assert_eq!(sg.index_of("Chicago"), Some(1));
    assert_eq!(sg.name_of(0).unwrap(), "Atlanta");
    assert_eq!(sg.vertex_count(), 3);
}

#[test]
fn test_graph_reflects_added_edges() {
    let mut sg = SymbolDigraph::new();
    sg.add_edge("a", "b");
    sg.add_edge("a", "c");
    let a = sg.index_of("a").unwrap();
    let b = sg.index_of("b").unwrap();
    let c = sg.index_of("c").unwrap();
    let g = sg.graph();
    assert_eq!(g.outdegree(a), 2);
    assert_eq!(g.adj(a), &[b, c]);
}

#[test]
fn test_unknown_name_has_no_index() {
    let sg = SymbolDigraph::new();
    assert_eq!(sg.index_of("nobody"), None);
}

#[test]
fn test_out_of_range_name_lookup_is_an_error() {
    let sg = SymbolDigraph::new();
    assert!(sg.name_of(0).is_err());
}
