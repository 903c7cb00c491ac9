//! # Identity Newtypes
//!
//! Newtype wrappers for the registry's identity namespaces. You cannot
//! pass a `RegistryId` where an `IdentityId` is expected — type-level
//! distinction prevents cross-namespace confusion.
//!
//! An `IdentityId` is the 32-byte Ed25519 verifying key of the identity
//! that holds it. The registry never stores account addresses; whoever
//! can produce signatures under a key *is* that identity. The all-zero
//! identity is reserved as the null identity and is rejected wherever an
//! acting identity is required.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::CryptoError;
use crate::hex;

/// A registry identity: the raw 32-byte Ed25519 verifying key.
///
/// Serializes as a hex-encoded string for JSON interoperability.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub [u8; 32]);

impl IdentityId {
    /// The reserved null identity. Never a valid signer or owner.
    pub const ZERO: IdentityId = IdentityId([0u8; 32]);

    /// Create an identity from raw key bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether this is the reserved null identity.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Render the identity as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse an identity from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        hex::decode_array::<32>(s)
            .map(Self)
            .map_err(CryptoError::KeyError)
    }
}

impl Serialize for IdentityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for IdentityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdentityId({}...)", hex::prefix(&self.0))
    }
}

impl std::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id:{}", self.to_hex())
    }
}

/// Unique identifier for one registry instance.
///
/// Framed into every signable meta-transaction message, so a signature
/// authorized for one registry can never be replayed against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryId(pub Uuid);

impl RegistryId {
    /// Generate a new random registry identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RegistryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegistryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "registry:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_identity() {
        assert!(IdentityId::ZERO.is_zero());
        assert!(!IdentityId::from_bytes([1u8; 32]).is_zero());
    }

    #[test]
    fn test_identity_hex_roundtrip() {
        let id = IdentityId::from_bytes([7u8; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(IdentityId::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn test_identity_invalid_hex() {
        assert!(IdentityId::from_hex("not-hex").is_err());
        assert!(IdentityId::from_hex("aabb").is_err());
        let non_ascii = format!("€{}", "a".repeat(61));
        assert!(IdentityId::from_hex(&non_ascii).is_err());
    }

    #[test]
    fn test_identity_serde_roundtrip() {
        let id = IdentityId::from_bytes([42u8; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.starts_with('"'));
        let back: IdentityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_identity_debug_truncates() {
        let id = IdentityId::from_bytes([0xabu8; 32]);
        let debug = format!("{id:?}");
        assert_eq!(debug, "IdentityId(abababab...)");
    }

    #[test]
    fn test_registry_id_unique() {
        assert_ne!(RegistryId::new(), RegistryId::new());
    }

    #[test]
    fn test_registry_id_display() {
        let id = RegistryId::new();
        assert!(id.to_string().starts_with("registry:"));
    }
}
