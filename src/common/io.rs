// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Wire formats: plain-text graph/weighted-graph input,
//! the symbol-graph text format, and the fixed-width binary element-record
//! format for string-keyed stores.

use crate::error::{LatticeError, LatticeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{BufRead, Write};

use super::strings::{decode_fixed_key, encode_fixed_key, split_fields, MAX_KEY_LEN};

/// A plain unweighted graph read from the §6 text format: `V`, `E`, then
/// `E` whitespace-separated vertex-index pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireGraph {
    pub vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

/// A weighted graph read from the §6 text format: as [`WireGraph`] but
/// each line additionally carries a floating-point weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireWeightedGraph {
    pub vertices: usize,
    pub edges: Vec<(usize, usize, f64)>,
}

fn parse_header(first_line: &str) -> LatticeResult<(usize, usize)> {
    let mut fields = first_line.split_whitespace();
    let v = fields
        .next()
        .ok_or_else(|| malformed("missing vertex count"))?
        .parse::<usize>()
        .map_err(|_| malformed("vertex count is not a non-negative integer"))?;
    let e = fields
        .next()
        .ok_or_else(|| malformed("missing edge count"))?
        .parse::<usize>()
        .map_err(|_| malformed("edge count is not a non-negative integer"))?;
    Ok((v, e))
}

fn malformed(reason: &str) -> LatticeError {
    LatticeError::MalformedInput {
        reason: reason.to_string(),
    }
}

/// Parse the §6 plain graph wire format: "V and E, then exactly E lines
/// each containing two whitespace-separated vertex indices."
///
/// ## Error Conditions
/// - malformed header or edge lines, or a vertex index outside `[0, V)`,
///   return [`LatticeError::MalformedInput`] rather than the source
///   library's fatal-exit behavior, since this is caller-supplied data.
pub fn read_graph<R: BufRead>(reader: R) -> LatticeResult<WireGraph> {
    let mut lines = reader.lines();
    let header = lines
        .next()
        .ok_or_else(|| malformed("empty input"))?
        .map_err(|e| malformed(&e.to_string()))?;
    let (v, e) = parse_header(&header)?;

    let mut edges = Vec::with_capacity(e);
    for _ in 0..e {
        let line = lines
            .next()
            .ok_or_else(|| malformed("fewer edge lines than declared edge count"))?
            .map_err(|err| malformed(&err.to_string()))?;
        let mut fields = line.split_whitespace();
        let a = fields
            .next()
            .ok_or_else(|| malformed("missing edge endpoint"))?
            .parse::<usize>()
            .map_err(|_| malformed("edge endpoint is not a non-negative integer"))?;
        let b = fields
            .next()
            .ok_or_else(|| malformed("missing edge endpoint"))?
            .parse::<usize>()
            .map_err(|_| malformed("edge endpoint is not a non-negative integer"))?;
        if a >= v || b >= v {
            return Err(malformed("vertex index out of range [0, V)"));
        }
        edges.push((a, b));
    }
    Ok(WireGraph { vertices: v, edges })
}

/// Parse the §6 weighted-graph wire format: as [`read_graph`] but each
/// edge line additionally carries a trailing floating-point weight.
pub fn read_weighted_graph<R: BufRead>(reader: R) -> LatticeResult<WireWeightedGraph> {
    let mut lines = reader.lines();
    let header = lines
        .next()
        .ok_or_else(|| malformed("empty input"))?
        .map_err(|e| malformed(&e.to_string()))?;
    let (v, e) = parse_header(&header)?;

    let mut edges = Vec::with_capacity(e);
    for _ in 0..e {
        let line = lines
            .next()
            .ok_or_else(|| malformed("fewer edge lines than declared edge count"))?
            .map_err(|err| malformed(&err.to_string()))?;
        let mut fields = line.split_whitespace();
        let a = fields
            .next()
            .ok_or_else(|| malformed("missing edge endpoint"))?
            .parse::<usize>()
            .map_err(|_| malformed("edge endpoint is not a non-negative integer"))?;
        let b = fields
            .next()
            .ok_or_else(|| malformed("missing edge endpoint"))?
            .parse::<usize>()
            .map_err(|_| malformed("edge endpoint is not a non-negative integer"))?;
        let w = fields
            .next()
            .ok_or_else(|| malformed("missing edge weight"))?
            .parse::<f64>()
            .map_err(|_| malformed("edge weight is not a floating-point number"))?;
        if a >= v || b >= v {
            return Err(malformed("vertex index out of range [0, V)"));
        }
        edges.push((a, b, w));
    }
    Ok(WireWeightedGraph { vertices: v, edges })
}

/// Name-to-id mapping built from the §6 symbol-graph text format: each
/// line is a vertex name followed by its neighbor names, delimiter-
/// separated; unknown names are assigned fresh ids in first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolGraph {
    pub name_to_id: HashMap<String, usize>,
    pub id_to_name: Vec<String>,
    pub edges: Vec<(usize, usize)>,
}

impl SymbolGraph {
    fn intern(&mut self, name: &str) -> usize {
        let truncated: String = name.chars().take(MAX_KEY_LEN).collect();
        if let Some(&id) = self.name_to_id.get(&truncated) {
            return id;
        }
        let id = self.id_to_name.len();
        self.id_to_name.push(truncated.clone());
        self.name_to_id.insert(truncated, id);
        id
    }
}

/// Parse the §6 symbol-graph text format.
///
/// ## Input
/// - `reader`: line source, one vertex and its neighbors per line
/// - `delim`: field delimiter (typically a single character)
///
/// ## Output
/// - a [`SymbolGraph`] exposing the name<->id mapping plus the edge list,
///   directed from each line's first name to every subsequent name on
///   that line
pub fn read_symbol_graph<R: BufRead>(reader: R, delim: char) -> LatticeResult<SymbolGraph> {
    let mut graph = SymbolGraph::default();
    for line in reader.lines() {
        let line = line.map_err(|e| malformed(&e.to_string()))?;
        let fields = split_fields(&line, delim);
        let mut iter = fields.into_iter();
        let head = match iter.next() {
            Some(h) => h,
            None => continue,
        };
        let head_id = graph.intern(head);
        for neighbor in iter {
            let neighbor_id = graph.intern(neighbor);
            graph.edges.push((head_id, neighbor_id));
        }
    }
    Ok(graph)
}

/// A single fixed 72-byte element record: a 64-byte NUL-padded key and an
/// 8-byte little-endian signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub key: [u8; MAX_KEY_LEN],
    pub value: i64,
}

/// Byte width of one encoded [`ElementRecord`]: 64-byte key + 8-byte value.
pub const ELEMENT_RECORD_LEN: usize = MAX_KEY_LEN + 8;

impl ElementRecord {
    pub fn new(key: &str, value: i64) -> LatticeResult<Self> {
        let key = encode_fixed_key(key).ok_or_else(|| {
            malformed("key exceeds 64 bytes for element record")
        })?;
        Ok(Self { key, value })
    }

    pub fn key_str(&self) -> String {
        decode_fixed_key(&self.key)
    }

    fn to_bytes(self) -> LatticeResult<[u8; ELEMENT_RECORD_LEN]> {
        let encoded = bincode::serialize(&self).map_err(|e| malformed(&e.to_string()))?;
        let mut buf = [0u8; ELEMENT_RECORD_LEN];
        buf.copy_from_slice(&encoded);
        Ok(buf)
    }

    fn from_bytes(bytes: &[u8]) -> LatticeResult<Self> {
        bincode::deserialize(bytes).map_err(|e| malformed(&e.to_string()))
    }
}

/// Write a flat sequence of fixed-size element records, each encoded with
/// `bincode`, as binary key-value input for string-keyed stores.
pub fn write_element_records<W: Write>(writer: &mut W, records: &[ElementRecord]) -> LatticeResult<()> {
    for record in records {
        writer
            .write_all(&record.to_bytes()?)
            .map_err(|e| malformed(&e.to_string()))?;
    }
    Ok(())
}

/// Read a flat sequence of fixed-size `bincode`-encoded element records.
///
/// ## Error Conditions
/// - returns [`LatticeError::MalformedInput`] if the byte length is not a
///   multiple of [`ELEMENT_RECORD_LEN`], or if any chunk fails to decode.
pub fn read_element_records(bytes: &[u8]) -> LatticeResult<Vec<ElementRecord>> {
    if bytes.len() % ELEMENT_RECORD_LEN != 0 {
        return Err(malformed("element-record stream length is not a multiple of 72 bytes"));
    }
    bytes
        .chunks_exact(ELEMENT_RECORD_LEN)
        .map(ElementRecord::from_bytes)
        .collect()
}
