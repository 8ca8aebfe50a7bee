//! Seed classification: raw user text to a tagged byte buffer.
//!
//! Each candidate interpretation is a pure `fn(&str) -> Option<Seed>`,
//! tried in priority order. The first `Some` wins; text no candidate
//! accepts becomes a UTF-8 string seed, so [`classify`] never fails.

use std::fmt;

use num_bigint::BigUint;

use crate::pubkey::decode_base58_32;

/// The interpretation that produced a seed's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    Bytes,
    Pubkey,
    Number,
    String,
}

impl SeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedKind::Bytes => "bytes",
            SeedKind::Pubkey => "pubkey",
            SeedKind::Number => "number",
            SeedKind::String => "string",
        }
    }
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified seed. Immutable once built; reclassify to change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    kind: SeedKind,
    data: Vec<u8>,
}

impl Seed {
    fn new(kind: SeedKind, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    pub fn kind(&self) -> SeedKind {
        self.kind
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

type Candidate = fn(&str) -> Option<Seed>;

/// Interpretations tried before the string fallback, highest priority first.
const CANDIDATES: &[Candidate] = &[as_byte_array, as_pubkey, as_number];

/// Classify a single raw input.
pub fn classify(raw: &str) -> Seed {
    CANDIDATES
        .iter()
        .find_map(|candidate| candidate(raw))
        .unwrap_or_else(|| as_string(raw))
}

/// Classify every input, preserving order.
pub fn classify_all<S: AsRef<str>>(raws: &[S]) -> Vec<Seed> {
    raws.iter().map(|raw| classify(raw.as_ref())).collect()
}

/// `[1, 2, 3]`: a JSON array of integers in `0..=255`.
fn as_byte_array(raw: &str) -> Option<Seed> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('[') {
        return None;
    }
    serde_json::from_str::<Vec<u8>>(trimmed)
        .ok()
        .map(|bytes| Seed::new(SeedKind::Bytes, bytes))
}

/// Base58 text that decodes to exactly 32 bytes.
fn as_pubkey(raw: &str) -> Option<Seed> {
    decode_base58_32(raw)
        .ok()
        .map(|bytes| Seed::new(SeedKind::Pubkey, bytes.to_vec()))
}

/// Unsigned decimal, encoded little-endian in as few bytes as possible.
fn as_number(raw: &str) -> Option<Seed> {
    if !raw.starts_with(|c: char| c.is_ascii_digit()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(raw.as_bytes(), 10).map(|n| Seed::new(SeedKind::Number, n.to_bytes_le()))
}

fn as_string(raw: &str) -> Seed {
    Seed::new(SeedKind::String, raw.as_bytes().to_vec())
}
