// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the binomial heap.

use super::*;

#[test]
fn test_insert_and_peek_min() {
    let mut heap = BinomialHeap::new();
    heap.insert(5, "five");
    heap.insert(2, "two");
    heap.insert(8, "eight");
    assert_eq!(heap.peek_min(), Some((&2, &"two")));
}

#[test]
fn test_delete_min_drains_in_ascending_order() {
    let mut heap = BinomialHeap::new();
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
    let mut heap: BinomialHeap<i32, ()> = BinomialHeap::new();
    assert_eq!(heap.peek_min(), None);
    assert_eq!(heap.delete_min(), None);
    assert!(heap.is_empty());
}

#[test]
fn test_power_of_two_sizes_exercise_carries() {
    // 16 inserts force every binomial-tree degree up to 4 to combine.
    let mut heap = BinomialHeap::new();
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
fn test_large_random_order_drains_sorted() {
    let mut heap = BinomialHeap::new();
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
