// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for RNG configuration.

use super::*;

#[test]
fn test_seeded_is_deterministic() {
    let mut a = RandomSource::seeded(42);
    let mut b = RandomSource::seeded(42);
    let sample_a: Vec<usize> = (0..20).map(|_| a.gen_range(0, 1000)).collect();
    let sample_b: Vec<usize> = (0..20).map(|_| b.gen_range(0, 1000)).collect();
    assert_eq!(sample_a, sample_b);
}

#[test]
fn test_gen_range_respects_bounds() {
    let mut rng = RandomSource::seeded(7);
    for _ in 0..200 {
        let v = rng.gen_range(3, 9);
        assert!((3..9).contains(&v));
    }
}

#[test]
fn test_global_is_usable() {
    let mut guard = RandomSource::global();
    let v = guard.gen_range(0, 10);
    assert!(v < 10);
}

#[test]
fn test_gen_bool_extremes() {
    let mut rng = RandomSource::seeded(1);
    assert!(!rng.gen_bool(0.0));
    assert!(rng.gen_bool(1.0));
}
