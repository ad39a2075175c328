// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the B+-tree.

use super::*;

#[test]
fn test_put_get_roundtrip() {
    let mut tree = BTree::with_order(4);
    for k in [5, 2, 8, 1, 9, 3, 7, 6, 4] {
        tree.put(k);
    }
    for k in [5, 2, 8, 1, 9, 3, 7, 6, 4] {
        assert_eq!(tree.get(&k), Some(&k));
    }
    assert_eq!(tree.get(&100), None);
    assert!(tree.check_invariants());
}

#[test]
fn test_put_duplicate_is_noop() {
    let mut tree = BTree::with_order(4);
    tree.put(5);
    tree.put(5);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_min_max() {
    let mut tree = BTree::with_order(4);
    for k in [5, 2, 8, 1, 9] {
        tree.put(k);
    }
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&9));
}

#[test]
fn test_range_is_sorted_and_bounded() {
    let mut tree = BTree::with_order(4);
    for k in [1, 5, 9, 13, 17, 21, 25] {
        tree.put(k);
    }
    assert_eq!(tree.range(&5, &17), vec![&5, &9, &13, &17]);
}

#[test]
fn test_iter_visits_every_key_in_order() {
    let mut tree = BTree::with_order(8);
    let mut keys: Vec<i32> = (0..300).collect();
    keys.reverse();
    for &k in &keys {
        tree.put(k);
    }
    let collected: Vec<i32> = tree.iter().copied().collect();
    let mut expected = keys.clone();
    expected.sort_unstable();
    assert_eq!(collected, expected);
}

#[test]
fn test_iter_rev_visits_every_key_in_descending_order() {
    let mut tree = BTree::with_order(8);
    let keys: Vec<i32> = (0..300).collect();
    for &k in &keys {
        tree.put(k);
    }
    let collected: Vec<i32> = tree.iter_rev().copied().collect();
    let mut expected = keys.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(collected, expected);
}

#[test]
fn test_splits_maintain_invariants_ascending_inserts() {
    let mut tree = BTree::with_order(4);
    for k in 0..500 {
        tree.put(k);
    }
    assert!(tree.check_invariants());
    assert_eq!(tree.len(), 500);
}

#[test]
fn test_splits_maintain_invariants_descending_inserts() {
    let mut tree = BTree::with_order(4);
    for k in (0..500).rev() {
        tree.put(k);
    }
    assert!(tree.check_invariants());
    assert_eq!(tree.len(), 500);
}

#[test]
fn test_delete_maintains_invariants_and_membership() {
    let mut tree = BTree::with_order(4);
    let keys: Vec<i32> = (0..300).collect();
    for &k in &keys {
        tree.put(k);
    }
    for &k in keys.iter().step_by(3) {
        tree.delete(&k);
    }
    assert!(tree.check_invariants());
    for &k in &keys {
        if k % 3 == 0 {
            assert_eq!(tree.get(&k), None);
        } else {
            assert_eq!(tree.get(&k), Some(&k));
        }
    }
}

#[test]
fn test_delete_down_to_empty() {
    let mut tree = BTree::with_order(4);
    let keys: Vec<i32> = (0..100).collect();
    for &k in &keys {
        tree.put(k);
    }
    for &k in &keys {
        tree.delete(&k);
        assert!(tree.check_invariants());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
}

#[test]
fn test_delete_missing_key_is_noop() {
    let mut tree = BTree::with_order(4);
    tree.put(1);
    tree.put(2);
    tree.delete(&100);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_delete_then_reinsert_reuses_freed_nodes() {
    let mut tree = BTree::with_order(4);
    for k in 0..80 {
        tree.put(k);
    }
    for k in 0..80 {
        tree.delete(&k);
    }
    assert!(tree.is_empty());
    for k in 200..260 {
        tree.put(k);
    }
    assert_eq!(tree.len(), 60);
    assert!(tree.check_invariants());
}
