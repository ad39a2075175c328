// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Foundation shared by every other module: RNG configuration, a
//! fixed-width random-string helper, and the wire-format readers/writers
//! for element records, graphs, and symbol graphs.

pub mod io;
pub mod rng;
pub mod strings;

#[cfg(test)]
mod io_test;
#[cfg(test)]
mod rng_test;

pub use io::{
    read_element_records, read_graph, read_symbol_graph, read_weighted_graph,
    write_element_records, ElementRecord, SymbolGraph, WireGraph, WireWeightedGraph,
};
pub use rng::RandomSource;
pub use strings::random_fixed_string;
