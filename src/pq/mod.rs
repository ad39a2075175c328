// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Meldable and indexed priority queues.
//!
//! [`pairing`], [`binomial`], and [`fibonacci`] are plain meldable
//! min-heaps: `insert` / `peek_min` / `delete_min`, plus `merge` for the
//! pairing heap. None of the three support changing a key once it's in
//! the heap, because there is no external handle to name which node to
//! change.
//!
//! [`indexed_pairing`], [`indexed_binomial`], and [`indexed_fibonacci`]
//! are the same three heap shapes addressed instead by a caller-chosen
//! `usize` index over a fixed universe `0..max_n`, which is what makes
//! `decrease_key`, `increase_key`, and arbitrary `delete` possible.

pub mod binomial;
pub mod fibonacci;
pub mod indexed_binomial;
pub mod indexed_fibonacci;
pub mod indexed_pairing;
pub mod pairing;

#[cfg(test)]
mod binomial_test;
#[cfg(test)]
mod fibonacci_test;
#[cfg(test)]
mod indexed_pairing_test;

pub use binomial::BinomialHeap;
pub use fibonacci::FibonacciHeap;
pub use indexed_binomial::IndexedBinomialHeap;
pub use indexed_fibonacci::IndexedFibonacciHeap;
pub use indexed_pairing::IndexedPairingHeap;
pub use pairing::PairingHeap;
