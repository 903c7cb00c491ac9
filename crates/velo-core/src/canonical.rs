//! # Canonical Field Framing — Unambiguous Digest Input
//!
//! This module defines `CanonicalFields`, the sole construction path for
//! bytes used in digest computation across the registry.
//!
//! ## Security Invariant
//!
//! The inner buffer is private. The only way to feed bytes into a digest
//! is through the framing methods, which length-prefix every field with
//! a big-endian `u64` before appending it. Two distinct field tuples can
//! therefore never frame to the same byte sequence — the classic
//! `hash("ab" + "c") == hash("a" + "bc")` concatenation collision is
//! impossible by construction.
//!
//! Every framing starts with a domain tag, so digests built for one
//! purpose (fingerprint derivation) can never collide with digests built
//! for another (meta-transaction messages), even over identical fields.

use sha2::{Digest, Sha256};

/// Digest input framed as a domain tag followed by length-prefixed fields.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalFields::new`], which writes the
///   domain tag as the first frame.
/// - Every field is preceded by its byte length as a big-endian `u64`.
/// - The inner buffer is private; downstream code cannot splice raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalFields(Vec<u8>);

impl CanonicalFields {
    /// Start a framing under the given domain tag.
    ///
    /// The tag is itself framed as a field, so a tag can never bleed
    /// into the first data field.
    pub fn new(domain_tag: &str) -> Self {
        let mut fields = Self(Vec::new());
        fields.push(domain_tag.as_bytes());
        fields
    }

    /// Append a string field.
    ///
    /// Empty strings are valid fields and still occupy a frame (their
    /// zero length is encoded), so `("", "a")` and `("a", "")` frame
    /// differently.
    pub fn field_str(mut self, field: &str) -> Self {
        self.push(field.as_bytes());
        self
    }

    /// Append a raw byte field.
    pub fn field_bytes(mut self, field: &[u8]) -> Self {
        self.push(field);
        self
    }

    /// Append an unsigned integer field (framed as 8 big-endian bytes).
    pub fn field_u64(mut self, field: u64) -> Self {
        self.push(&field.to_be_bytes());
        self
    }

    /// Access the framed bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn push(&mut self, field: &[u8]) {
        self.0.extend_from_slice(&(field.len() as u64).to_be_bytes());
        self.0.extend_from_slice(field);
    }
}

impl AsRef<[u8]> for CanonicalFields {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute a SHA-256 digest over framed fields.
///
/// Accepts only `&CanonicalFields`, not raw `&[u8]`. This compile-time
/// constraint prevents any code path from hashing unframed bytes.
pub fn sha256_digest(fields: &CanonicalFields) -> [u8; 32] {
    let hash = Sha256::digest(fields.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    bytes
}
