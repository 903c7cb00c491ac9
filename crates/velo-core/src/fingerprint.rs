//! # Fingerprint — The Registry's Primary Key
//!
//! A `Fingerprint` is the deterministic unique identifier derived from an
//! asset's descriptive attributes (vendor, serial number, frame number).
//! It is the key of the asset record store and the subject of every
//! lifecycle state transition.
//!
//! ## Security Invariant
//!
//! Derivation flows through [`CanonicalFields`], so the attribute triple
//! is length-prefix framed before hashing. Distinct triples produce
//! distinct digest inputs even when their naive concatenations coincide,
//! and empty attribute fields remain distinguishable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::canonical::{sha256_digest, CanonicalFields};
use crate::error::CryptoError;
use crate::hex;

/// Domain tag framed into every fingerprint derivation.
///
/// Versioned so the derivation can evolve without silently colliding
/// with digests produced under the current rules.
pub const FINGERPRINT_DOMAIN: &str = "velo.registry.fingerprint.v1";

/// A 32-byte SHA-256 fingerprint identifying one registered asset.
///
/// Serializes as a lowercase hex string for JSON interoperability.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Derive the fingerprint for an attribute triple.
    ///
    /// Pure and deterministic: identical inputs always produce identical
    /// output. Each field may be empty; the triple as a whole is the
    /// uniqueness key.
    pub fn derive(vendor: &str, serial_number: &str, frame_number: &str) -> Self {
        let fields = CanonicalFields::new(FINGERPRINT_DOMAIN)
            .field_str(vendor)
            .field_str(serial_number)
            .field_str(frame_number);
        Self(sha256_digest(&fields))
    }

    /// Create a fingerprint from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the fingerprint as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse a fingerprint from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        hex::decode_array::<32>(s)
            .map(Self)
            .map_err(CryptoError::DigestError)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fingerprint({}...)", hex::prefix(&self.0))
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fp:{}", self.to_hex())
    }
}
