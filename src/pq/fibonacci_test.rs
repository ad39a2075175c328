// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the Fibonacci heap.

use super::*;

#[test]
fn test_insert_and_peek_min() {
    let mut heap = FibonacciHeap::new();
    heap.insert(5, "five");
    heap.insert(2, "two");
    heap.insert(8, "eight");
    assert_eq!(heap.peek_min(), Some((&2, &"two")));
}

#[test]
fn test_delete_min_drains_in_ascending_order() {
    let mut heap = FibonacciHeap::new();
    for k in [5, 2, 8, 1, 9, 3, 7, 0, 4, 6] {
        heap.insert(k, k);
    }
    let mut drained = Vec::new();
    while let Some((k, _)) = heap.delete_min() {
        drained.push(k);
    }
    assert_eq!(drained, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_empty_heap_queries_return_none() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    assert_eq!(heap.peek_min(), None);
    assert_eq!(heap.delete_min(), None);
    assert!(heap.is_empty());
}

#[test]
fn test_insert_is_lazy_until_delete_min() {
    // Every insert should just grow the root list; no consolidation
    // happens until the first delete_min forces it.
    let mut heap = FibonacciHeap::new();
    for k in (0..32).rev() {
        heap.insert(k, k);
    }
    assert_eq!(heap.peek_min(), Some((&0, &0)));
    assert_eq!(heap.len(), 32);
}

#[test]
fn test_power_of_two_sizes_exercise_consolidation() {
    let mut heap = FibonacciHeap::new();
    for k in (0..16).rev() {
        heap.insert(k, k);
    }
    let mut drained = Vec::new();
    while let Some((k, _)) = heap.delete_min() {
        drained.push(k);
    }
    assert_eq!(drained, (0..16).collect::<Vec<_>>());
}

#[test]
fn test_interleaved_insert_and_delete_min() {
    let mut heap = FibonacciHeap::new();
    heap.insert(10, 10);
    heap.insert(4, 4);
    assert_eq!(heap.delete_min(), Some((4, 4)));
    heap.insert(1, 1);
    heap.insert(7, 7);
    assert_eq!(heap.delete_min(), Some((1, 1)));
    assert_eq!(heap.delete_min(), Some((7, 7)));
    assert_eq!(heap.delete_min(), Some((10, 10)));
    assert_eq!(heap.delete_min(), None);
}

#[test]
fn test_large_random_order_drains_sorted() {
    let mut heap = FibonacciHeap::new();
    let mut keys: Vec<i32> = (0..500).collect();
    keys.sort_by_key(|&k| (k * 37) % 500);
    for &k in &keys {
        heap.insert(k, k);
    }
    assert_eq!(heap.len(), 500);
    let mut drained = Vec::new();
    while let Some((k, _)) = heap.delete_min() {
        drained.push(k);
    }
    assert_eq!(drained, (0..500).collect::<Vec<_>>());
}

#[test]
fn test_repeated_delete_min_shrinks_degree_table_inputs() {
    // Deleting down to a single element exercises consolidate() at every
    // intermediate size, including ones where len() shrinks below what
    // the degree table was originally sized for.
    let mut heap = FibonacciHeap::new();
    for k in 0..64 {
        heap.insert(k, k);
    }
    let mut drained = Vec::new();
    for _ in 0..64 {
        let (k, _) = heap.delete_min().unwrap();
        drained.push(k);
    }
    assert_eq!(drained, (0..64).collect::<Vec<_>>());
    assert!(heap.is_empty());
}
