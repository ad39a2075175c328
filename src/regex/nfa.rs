// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Thompson-construction NFA regex matcher, after the classic
//! one-pass-compile / DFS-closure recognizer: a pattern of length `R`
//! compiles to a directed graph on `R+1` states carrying only
//! ε-transitions (`(`, `)`, `*`, `+`, `?`, and `|` all contribute
//! ε-edges); a literal byte's transition from state `i` to `i+1` stays
//! implicit rather than being materialized as a graph edge.
//!
//! Supported metacharacters: `( ) | * + ? .`. Anything else is a
//! literal. Input text may not itself contain a metacharacter.

use crate::error::{LatticeError, LatticeResult};
use crate::graph::digraph::Digraph;
use crate::graph::traversal::dfs_digraph_reachable;

const METACHARACTERS: &[char] = &['(', ')', '|', '*', '+', '?'];

/// A compiled regular expression: the source pattern plus its
/// ε-transition digraph on `pattern.len() + 1` states.
pub struct Nfa {
    pattern: Vec<char>,
    eps: Digraph,
}

impl Nfa {
    /// Compile `pattern` into its ε-transition digraph.
    ///
    /// The `?` operator is implemented with a forward skip edge only
    /// (no back-edge), matching the one-character-lookahead rule this
    /// engine was grounded on. Since this engine only answers whether
    /// a pattern matches and never extracts capture groups, greedy vs.
    /// lazy `?` semantics are unobservable here — "zero or one X" is
    /// the only meaningful reading.
    pub fn from_pattern(pattern: &str) -> LatticeResult<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let r = chars.len();
        let mut eps = Digraph::new(r + 1);

        let mut ops: Vec<usize> = Vec::new();

        for i in 0..r {
            let mut lp = i;

            match chars[i] {
                '(' | '|' => ops.push(i),
                ')' => {
                    // Pop the `(` / `|` stack back to (and including) the
                    // matching `(`. Every `|` popped along the way marks
                    // the end of one alternative: it gets an ε-edge to
                    // this closing paren, and the position right after it
                    // (the start of the next alternative) is remembered
                    // so the matching `(` can ε-edge straight into it.
                    let mut branch_starts: Vec<usize> = Vec::new();
                    loop {
                        let op = ops.pop().ok_or(LatticeError::UnbalancedParentheses)?;
                        match chars[op] {
                            '|' => {
                                eps.add_edge(op, i).unwrap();
                                branch_starts.push(op + 1);
                            }
                            '(' => {
                                lp = op;
                                break;
                            }
                            _ => unreachable!("only '(' and '|' are ever pushed"),
                        }
                    }
                    for start in branch_starts {
                        eps.add_edge(lp, start).unwrap();
                    }
                }
                _ => {}
            }

            if i < r - 1 {
                match chars[i + 1] {
                    '*' => {
                        eps.add_edge(lp, i + 1).unwrap();
                        eps.add_edge(i + 1, lp).unwrap();
                    }
                    '+' => {
                        eps.add_edge(i + 1, lp).unwrap();
                    }
                    '?' => {
                        eps.add_edge(lp, i + 1).unwrap();
                    }
                    _ => {}
                }
            }

            if matches!(chars[i], '(' | '*' | '+' | '?' | ')') {
                eps.add_edge(i, i + 1).unwrap();
            }
        }

        if !ops.is_empty() {
            return Err(LatticeError::UnbalancedParentheses);
        }

        Ok(Self { pattern: chars, eps })
    }

    fn epsilon_closure(&self, states: &[usize]) -> Vec<usize> {
        let n = self.eps.vertex_count();
        let mut reachable = vec![false; n];
        for &s in states {
            if !reachable[s] {
                for (v, r) in dfs_digraph_reachable(&self.eps, s).into_iter().enumerate() {
                    reachable[v] = reachable[v] || r;
                }
            }
        }
        (0..n).filter(|&v| reachable[v]).collect()
    }

    /// Whether `text` matches the whole pattern. Errs if `text`
    /// contains one of the supported metacharacters, since the
    /// recognizer has no way to distinguish a literal `(` from a
    /// grouping operator in the input stream.
    pub fn matches(&self, text: &str) -> LatticeResult<bool> {
        if let Some(ch) = text.chars().find(|c| METACHARACTERS.contains(c)) {
            return Err(LatticeError::UnsupportedMetacharacter { ch });
        }

        let r = self.pattern.len();
        let mut states = self.epsilon_closure(&[0]);

        for c in text.chars() {
            let next: Vec<usize> = states
                .iter()
                .copied()
                .filter(|&s| s < r && (self.pattern[s] == '.' || self.pattern[s] == c))
                .map(|s| s + 1)
                .collect();
            if next.is_empty() {
                return Ok(false);
            }
            states = self.epsilon_closure(&next);
        }

        Ok(states.contains(&r))
    }
}
