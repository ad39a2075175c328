// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by every container, graph, and algorithm in this crate.
//!
//! Non-fatal precondition, capacity, and semantic errors (kinds
//! 1-4) are returned as `LatticeError`. Kind 5 (system, e.g. allocation
//! failure) and genuine caller misuse that no safe API can prevent are left
//! to Rust's own panic machinery, matching the source library's "fatal
//! misuse terminates the program" policy.

use std::fmt;

/// Standard `Result` alias for fallible operations in this crate.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Error conditions produced by containers, graphs, and algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// A vertex, rank, or array index fell outside the valid range.
    IndexOutOfRange { index: i64, bound: usize },

    /// An indexed priority queue operation referenced an index that is not
    /// currently present (never inserted, or already removed).
    NotContained { index: usize },

    /// `decrease_key` was called with a key not strictly smaller than the
    /// current key under the container's comparator.
    NotDecreased,

    /// `increase_key` was called with a key not strictly larger than the
    /// current key under the container's comparator.
    NotIncreased,

    /// An indexed priority queue insert was attempted beyond its declared
    /// capacity, or a linear-probing hash insert into a full table.
    CapacityExceeded { capacity: usize },

    /// Dijkstra's precondition (non-negative edge weights) was violated.
    NegativeEdgeWeight { from: usize, to: usize, weight: f64 },

    /// Floyd-Warshall detected a negative cycle; further path queries on
    /// the affected graph are undefined.
    NegativeCycle,

    /// A regular expression used an unsupported metacharacter, or input
    /// text to the NFA recognizer contained a metacharacter.
    UnsupportedMetacharacter { ch: char },

    /// A regular expression had unbalanced parentheses.
    UnbalancedParentheses,

    /// `bipartition()` was requested on a graph that is not bipartite.
    NotBipartite,

    /// Graph/symbol-graph/element-record wire input was malformed.
    MalformedInput { reason: String },

    /// A B-tree (or other invariant-checked structure) node violated a
    /// structural invariant; this signals an implementation bug rather
    /// than a caller error.
    InvariantViolation { reason: String },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {} out of range (bound {})", index, bound)
            }
            Self::NotContained { index } => {
                write!(f, "index {} is not contained", index)
            }
            Self::NotDecreased => write!(f, "new key is not strictly smaller, decrease-key is a no-op"),
            Self::NotIncreased => write!(f, "new key is not strictly larger, increase-key is a no-op"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity exhausted (capacity {})", capacity)
            }
            Self::NegativeEdgeWeight { from, to, weight } => {
                write!(
                    f,
                    "negative edge weight {} on edge {}->{}, violates Dijkstra's precondition",
                    weight, from, to
                )
            }
            Self::NegativeCycle => write!(f, "negative cycle present, shortest paths undefined"),
            Self::UnsupportedMetacharacter { ch } => {
                write!(f, "unsupported metacharacter '{}'", ch)
            }
            Self::UnbalancedParentheses => write!(f, "unbalanced parentheses in pattern"),
            Self::NotBipartite => write!(f, "graph is not bipartite"),
            Self::MalformedInput { reason } => write!(f, "malformed input: {}", reason),
            Self::InvariantViolation { reason } => write!(f, "invariant violation: {}", reason),
        }
    }
}

impl std::error::Error for LatticeError {}
