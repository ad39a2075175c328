// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for wire-format readers/writers.

use super::*;
use std::io::Cursor;

#[test]
fn test_read_graph_happy_path() {
    let input = "4 3\n0 1\n1 2\n2 3\n";
    let graph = read_graph(Cursor::new(input)).unwrap();
    assert_eq!(graph.vertices, 4);
    assert_eq!(graph.edges, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn test_read_graph_rejects_out_of_range_vertex() {
    let input = "2 1\n0 5\n";
    let err = read_graph(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, LatticeError::MalformedInput { .. }));
}

#[test]
fn test_read_graph_rejects_truncated_edges() {
    let input = "2 2\n0 1\n";
    assert!(read_graph(Cursor::new(input)).is_err());
}

#[test]
fn test_read_weighted_graph_happy_path() {
    let input = "3 2\n0 1 0.5\n1 2 2.0\n";
    let g = read_weighted_graph(Cursor::new(input)).unwrap();
    assert_eq!(g.vertices, 3);
    assert_eq!(g.edges, vec![(0, 1, 0.5), (1, 2, 2.0)]);
}

#[test]
fn test_symbol_graph_assigns_ids_in_first_seen_order() {
    let input = "JFK MCO\nORD DEN JFK\nMCO ORD\n";
    let sg = read_symbol_graph(Cursor::new(input), ' ').unwrap();
    assert_eq!(sg.name_to_id["JFK"], 0);
    assert_eq!(sg.name_to_id["MCO"], 1);
    assert_eq!(sg.name_to_id["ORD"], 2);
    assert_eq!(sg.name_to_id["DEN"], 3);
    assert_eq!(sg.id_to_name[2], "ORD");
    assert_eq!(sg.edges, vec![(0, 1), (2, 3), (2, 0), (1, 2)]);
}

#[test]
fn test_symbol_graph_truncates_long_names() {
    let long_name = "x".repeat(100);
    let input = format!("{} neighbor\n", long_name);
    let sg = read_symbol_graph(Cursor::new(input), ' ').unwrap();
    assert_eq!(sg.id_to_name[0].len(), 64);
}

#[test]
fn test_element_record_roundtrip() {
    let records = vec![
        ElementRecord::new("aaa", 1).unwrap(),
        ElementRecord::new("bbb", -2).unwrap(),
    ];
    let mut buf = Vec::new();
    write_element_records(&mut buf, &records).unwrap();
    assert_eq!(buf.len(), records.len() * ELEMENT_RECORD_LEN);

    let decoded = read_element_records(&buf).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].key_str(), "aaa");
    assert_eq!(decoded[0].value, 1);
    assert_eq!(decoded[1].key_str(), "bbb");
    assert_eq!(decoded[1].value, -2);
}

#[test]
fn test_element_record_rejects_overlong_key() {
    let long_key = "k".repeat(65);
    assert!(ElementRecord::new(&long_key, 0).is_err());
}

#[test]
fn test_read_element_records_rejects_misaligned_length() {
    let buf = vec![0u8; ELEMENT_RECORD_LEN - 1];
    assert!(read_element_records(&buf).is_err());
}
