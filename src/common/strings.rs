// Copyright 2026 The corelattice Authors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Random fixed-width string generation and the 64-byte key encoding used
//! by the element-record wire format.

use super::rng::RandomSource;

/// Maximum key length for string-keyed element records and symbol-graph
/// vertex names. The element record binary format uses a fixed 72 bytes
/// per record: 64 bytes of NUL-padded key plus an 8-byte value.
pub const MAX_KEY_LEN: usize = 64;

/// Generate a random alphanumeric string of exactly `len` bytes.
///
/// ## Input
/// - `rng`: source of randomness (see [`RandomSource`])
/// - `len`: exact length of the returned string, must be `<= MAX_KEY_LEN`
///
/// ## Output
/// - a `String` of `len` ASCII alphanumeric bytes
///
/// ## Error Conditions
/// - panics if `len > MAX_KEY_LEN`, matching the source library's
///   fixed-width key field.
pub fn random_fixed_string(rng: &mut RandomSource, len: usize) -> String {
    assert!(
        len <= MAX_KEY_LEN,
        "random_fixed_string: len {} exceeds MAX_KEY_LEN {}",
        len,
        MAX_KEY_LEN
    );
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    (0..len)
        .map(|_| ALPHABET[rng.gen_u8() as usize % ALPHABET.len()] as char)
        .collect()
}

/// Encode `key` as a fixed `MAX_KEY_LEN`-byte, NUL-padded buffer.
///
/// ## Error Conditions
/// - returns `None` if `key` is longer than `MAX_KEY_LEN` bytes (the
///   source format truncates; this crate refuses instead so callers never
///   silently lose key bytes).
pub fn encode_fixed_key(key: &str) -> Option<[u8; MAX_KEY_LEN]> {
    let bytes = key.as_bytes();
    if bytes.len() > MAX_KEY_LEN {
        return None;
    }
    let mut buf = [0u8; MAX_KEY_LEN];
    buf[..bytes.len()].copy_from_slice(bytes);
    Some(buf)
}

/// Decode a fixed-width NUL-padded key buffer back to a `String`, trimming
/// the trailing NUL padding.
pub fn decode_fixed_key(buf: &[u8; MAX_KEY_LEN]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(MAX_KEY_LEN);
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// Split `s` on every occurrence of `delim`, discarding empty fields at
/// the boundaries (mirrors the source library's string splitter used to
/// tokenize symbol-graph lines).
pub fn split_fields(s: &str, delim: char) -> Vec<&str> {
    s.split(delim).filter(|field| !field.is_empty()).collect()
}
