// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the indexed pairing heap.

use super::*;
use crate::error::LatticeError;

#[test]
fn test_insert_and_peek_min() {
    let mut heap = IndexedPairingHeap::with_capacity(8);
    heap.insert(3, 30).unwrap();
    heap.insert(1, 10).unwrap();
    heap.insert(5, 50).unwrap();
    assert_eq!(heap.peek_min(), Some((1, &10)));
}

#[test]
fn test_delete_min_drains_in_ascending_order() {
    let mut heap = IndexedPairingHeap::with_capacity(10);
    for i in [5, 2, 8, 1, 9, 3, 7, 0, 4, 6] {
        heap.insert(i, i as i32).unwrap();
    }
    let mut drained = Vec::new();
    while let Some((idx, key)) = heap.delete_min() {
        assert_eq!(idx as i32, key);
        drained.push(key);
    }
    assert_eq!(drained, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let mut heap: IndexedPairingHeap<i32> = IndexedPairingHeap::with_capacity(4);
    assert_eq!(
        heap.insert(4, 1),
        Err(LatticeError::IndexOutOfRange { index: 4, bound: 4 })
    );
}

#[test]
fn test_decrease_key_moves_node_up() {
    let mut heap = IndexedPairingHeap::with_capacity(5);
    heap.insert(0, 50).unwrap();
    heap.insert(1, 40).unwrap();
    heap.insert(2, 30).unwrap();
    heap.insert(3, 20).unwrap();
    heap.insert(4, 10).unwrap();
    assert_eq!(heap.peek_min(), Some((4, &10)));
    heap.decrease_key(0, 1).unwrap();
    assert_eq!(heap.peek_min(), Some((0, &1)));
}

#[test]
fn test_decrease_key_rejects_non_decreasing() {
    let mut heap = IndexedPairingHeap::with_capacity(3);
    heap.insert(0, 10).unwrap();
    assert_eq!(heap.decrease_key(0, 10), Err(LatticeError::NotDecreased));
    assert_eq!(heap.decrease_key(0, 20), Err(LatticeError::NotDecreased));
}

#[test]
fn test_increase_key_rejects_non_increasing() {
    let mut heap = IndexedPairingHeap::with_capacity(3);
    heap.insert(0, 10).unwrap();
    assert_eq!(heap.increase_key(0, 10), Err(LatticeError::NotIncreased));
    assert_eq!(heap.increase_key(0, 5), Err(LatticeError::NotIncreased));
}

#[test]
fn test_increase_key_changes_identity_but_keeps_index() {
    let mut heap = IndexedPairingHeap::with_capacity(3);
    heap.insert(0, 1).unwrap();
    heap.insert(1, 2).unwrap();
    heap.increase_key(0, 100).unwrap();
    assert_eq!(heap.key_of(0), Some(&100));
    assert_eq!(heap.peek_min(), Some((1, &2)));
}

#[test]
fn test_delete_arbitrary_node_preserves_remaining_heap() {
    let mut heap = IndexedPairingHeap::with_capacity(6);
    for i in 0..6 {
        heap.insert(i, (i * 10) as i32).unwrap();
    }
    assert_eq!(heap.delete(3).unwrap(), Some(30));
    assert!(!heap.contains(3));
    let mut drained = Vec::new();
    while let Some((_, key)) = heap.delete_min() {
        drained.push(key);
    }
    assert_eq!(drained, vec![0, 10, 20, 40, 50]);
}

#[test]
fn test_delete_missing_index_returns_none() {
    let mut heap: IndexedPairingHeap<i32> = IndexedPairingHeap::with_capacity(3);
    assert_eq!(heap.delete(1).unwrap(), None);
}

#[test]
fn test_reinsert_at_same_index_replaces_old_entry() {
    let mut heap = IndexedPairingHeap::with_capacity(4);
    heap.insert(0, 10).unwrap();
    heap.insert(1, 20).unwrap();
    heap.insert(0, 5).unwrap();
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.peek_min(), Some((0, &5)));
}

#[test]
fn test_large_random_order_with_decrease_keys() {
    let mut heap = IndexedPairingHeap::with_capacity(300);
    for i in 0..300 {
        heap.insert(i, (600 - i) as i32).unwrap();
    }
    for i in 0..300 {
        heap.decrease_key(i, i as i32).unwrap();
    }
    let mut drained = Vec::new();
    while let Some((_, key)) = heap.delete_min() {
        drained.push(key);
    }
    assert_eq!(drained, (0..300).collect::<Vec<_>>());
}
