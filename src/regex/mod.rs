// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! A small regular-expression engine built as a Thompson-construction
//! NFA over this crate's own directed-graph substrate.

pub mod nfa;


pub use nfa::Nfa;
