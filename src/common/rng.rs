// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! RNG configuration knob shared by graph generators, the skip list's
//! level sampling, and the random fixed-width string helper.
//!
//! The process RNG is the one piece of global
//! mutable state this library keeps, and requires that its seeding be
//! "a distinct configuration knob exposed at startup" rather than buried
//! inside individual containers. `RandomSource` is that knob: construct
//! one explicitly with a fixed seed for reproducible tests and benchmarks,
//! or borrow the lazily-initialized process-wide default via `global()`.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard};

/// A seedable source of randomness.
///
/// Every consumer (graph generators, `collections::SkipList`,
/// `common::random_fixed_string`) takes `&mut RandomSource` rather than
/// reaching for `rand::thread_rng()` directly, so a caller that needs a
/// deterministic test fixture can always supply `RandomSource::seeded(_)`.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from OS entropy, once per call site.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed deterministically, for reproducible tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[lo, hi)`. Panics if `lo >= hi`.
    pub fn gen_range(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..hi)
    }

    /// Bernoulli(p) trial, used by the skip list for level promotion.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Uniform `f64` in `[0.0, 1.0)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform byte, used by the random-string helper.
    pub fn gen_u8(&mut self) -> u8 {
        self.rng.gen::<u8>()
    }

    /// The process-wide default RNG, seeded from entropy on first use.
    ///
    /// Shared by every caller that does not need a dedicated, reproducible
    /// `RandomSource` of its own — this is the "process RNG seeded from
    /// the wall clock once per program, with the
    /// wall-clock seed replaced by OS entropy (the idiomatic equivalent in
    /// a language where `rand` already draws from a CSPRNG).
    pub fn global() -> MutexGuard<'static, RandomSource> {
        static GLOBAL: Lazy<Mutex<RandomSource>> = Lazy::new(|| Mutex::new(RandomSource::from_entropy()));
        GLOBAL.lock().expect("RandomSource global lock poisoned")
    }
}
