// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the AVL tree.

use super::*;

#[test]
fn test_put_get_roundtrip() {
    let mut tree = AvlTree::new();
    for k in [5, 2, 8, 1, 9, 3] {
        tree.put(k);
    }
    for k in [5, 2, 8, 1, 9, 3] {
        assert_eq!(tree.get(&k), Some(&k));
    }
    assert_eq!(tree.get(&100), None);
}

#[test]
fn test_put_duplicate_is_noop() {
    let mut tree = AvlTree::new();
    tree.put(5);
    tree.put(5);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_min_max() {
    let mut tree = AvlTree::new();
    for k in [5, 2, 8, 1, 9] {
        tree.put(k);
    }
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&9));
}

#[test]
fn test_floor_ceiling() {
    let mut tree = AvlTree::new();
    for k in [10, 20, 30, 40] {
        tree.put(k);
    }
    assert_eq!(tree.floor(&25), Some(&20));
    assert_eq!(tree.ceiling(&25), Some(&30));
    assert_eq!(tree.floor(&10), Some(&10));
    assert_eq!(tree.ceiling(&40), Some(&40));
    assert_eq!(tree.floor(&5), None);
    assert_eq!(tree.ceiling(&45), None);
}

#[test]
fn test_rank_select_are_mutual_inverses() {
    let mut tree = AvlTree::new();
    let keys = [50, 20, 80, 10, 30, 70, 90, 5, 15, 25];
    for k in keys {
        tree.put(k);
    }
    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    for r in 0..tree.len() {
        let key = *tree.select(r).unwrap();
        assert_eq!(tree.rank(&key), r);
        assert_eq!(key, sorted[r]);
    }
    for key in &sorted {
        let r = tree.rank(key);
        assert_eq!(tree.select(r), Some(key));
    }
}

#[test]
fn test_range_is_sorted_and_bounded() {
    let mut tree = AvlTree::new();
    for k in [1, 5, 9, 13, 17, 21, 25] {
        tree.put(k);
    }
    let result = tree.range(&5, &17);
    assert_eq!(result, vec![&5, &9, &13, &17]);
}

#[test]
fn test_delete_maintains_invariants_and_membership() {
    let mut tree = AvlTree::new();
    let keys: Vec<i32> = (0..200).collect();
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
fn test_balance_stays_within_one_under_random_inserts() {
    let mut tree = AvlTree::new();
    // Ascending inserts are the adversarial case for an unbalanced BST.
    for k in 0..1000 {
        tree.put(k);
    }
    assert!(tree.check_invariants());
}

#[test]
fn test_empty_tree_queries_return_none() {
    let tree: AvlTree<i32> = AvlTree::new();
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.get(&1), None);
    assert_eq!(tree.select(0), None);
}

#[test]
fn test_delete_then_reinsert_reuses_freed_nodes() {
    let mut tree = AvlTree::new();
    for k in 0..50 {
        tree.put(k);
    }
    for k in 0..50 {
        tree.delete(&k);
    }
    assert!(tree.is_empty());
    for k in 100..150 {
        tree.put(k);
    }
    assert_eq!(tree.len(), 50);
    assert!(tree.check_invariants());
}
