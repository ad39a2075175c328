// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the separate-chaining hash table.

use super::*;

#[test]
fn test_put_get_roundtrip() {
    let mut map = HashChain::new();
    map.put("a", 1);
    map.put("b", 2);
    assert_eq!(map.get(&"a"), Some(&1));
    assert_eq!(map.get(&"b"), Some(&2));
    assert_eq!(map.get(&"c"), None);
}

#[test]
fn test_put_overwrites_and_returns_previous() {
    let mut map = HashChain::new();
    assert_eq!(map.put("a", 1), None);
    assert_eq!(map.put("a", 2), Some(1));
    assert_eq!(map.get(&"a"), Some(&2));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_delete_removes_and_returns_value() {
    let mut map = HashChain::new();
    map.put(1, "one");
    assert_eq!(map.delete(&1), Some("one"));
    assert_eq!(map.get(&1), None);
    assert_eq!(map.delete(&1), None);
}

#[test]
fn test_grows_and_rehashes_under_load() {
    let mut map = HashChain::new();
    for i in 0..1000 {
        map.put(i, i * 2);
    }
    assert_eq!(map.len(), 1000);
    for i in 0..1000 {
        assert_eq!(map.get(&i), Some(&(i * 2)));
    }
    // Growth should keep bucket chains short relative to the table size.
    assert!(map.max_bucket_len() < 50);
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut map = HashChain::new();
    map.put("x", 10);
    *map.get_mut(&"x").unwrap() += 5;
    assert_eq!(map.get(&"x"), Some(&15));
}

#[test]
fn test_clear_resets_len() {
    let mut map = HashChain::new();
    map.put(1, 1);
    map.put(2, 2);
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.get(&1), None);
}

#[test]
fn test_iter_visits_every_entry() {
    let mut map = HashChain::new();
    for i in 0..20 {
        map.put(i, i);
    }
    let mut seen: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..20).collect::<Vec<_>>());
}
