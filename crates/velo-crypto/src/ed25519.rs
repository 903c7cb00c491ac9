//! # Identity Keys and Meta-Transaction Signatures
//!
//! An asset owner's registry identity is their Ed25519 verifying key.
//! This module provides key generation, signing of meta-transaction
//! digests, and verification of a signature against a claimed identity.
//!
//! Ed25519 has no public-key recovery: the relayer submits the claimed
//! signer alongside the signature, and verification binds the two. A
//! relayer naming the wrong identity cannot produce a signature that
//! verifies under it, so the authority semantics are the same as
//! recovery-based schemes.
//!
//! ## Security Invariant
//!
//! - Signing input MUST be `&MessageDigest` — you cannot sign raw bytes.
//!   The only way to obtain a digest is [`crate::message`]'s framed,
//!   domain-tagged construction.
//! - Private keys are never serialized or logged. `IdentityKeyPair` does
//!   not implement `Serialize` and its `Debug` output is redacted.

use ed25519_dalek::{Signer, Verifier};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use velo_core::error::CryptoError;
use velo_core::IdentityId;

use crate::message::MessageDigest;

/// A 64-byte Ed25519 signature over a meta-transaction digest.
///
/// Serializes as a hex-encoded string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MetaSignature(pub [u8; 64]);

/// An Ed25519 key pair whose verifying key is the holder's registry
/// identity.
///
/// Does not implement `Serialize` — private keys must not leak into
/// logs, responses, or artifacts.
pub struct IdentityKeyPair {
    signing_key: ed25519_dalek::SigningKey,
}

// ---------------------------------------------------------------------------
// MetaSignature impls
// ---------------------------------------------------------------------------

impl MetaSignature {
    /// Create a signature from raw 64 bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Return the raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Render the signature as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a signature from a 128-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if !hex.is_ascii() {
            return Err(CryptoError::VerificationFailed(
                "signature hex must be ASCII".to_string(),
            ));
        }
        if hex.len() != 128 {
            return Err(CryptoError::VerificationFailed(format!(
                "signature hex must be 128 chars, got {}",
                hex.len()
            )));
        }
        let mut bytes = [0u8; 64];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pos = i * 2;
            *byte = u8::from_str_radix(&hex[pos..pos + 2], 16).map_err(|e| {
                CryptoError::VerificationFailed(format!("invalid hex at {pos}: {e}"))
            })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for MetaSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for MetaSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for MetaSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MetaSignature({}...)", &self.to_hex()[..8])
    }
}

impl std::fmt::Display for MetaSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// IdentityKeyPair impls
// ---------------------------------------------------------------------------

impl IdentityKeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { signing_key }
    }

    /// Create a key pair from a raw 32-byte private key seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The registry identity this key pair controls.
    pub fn identity(&self) -> IdentityId {
        IdentityId::from_bytes(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a meta-transaction message digest.
    ///
    /// The input MUST be a `&MessageDigest` produced by the framed
    /// message construction; raw bytes cannot be signed.
    pub fn sign(&self, digest: &MessageDigest) -> MetaSignature {
        let sig = self.signing_key.sign(digest.as_bytes());
        MetaSignature(sig.to_bytes())
    }
}

impl std::fmt::Debug for IdentityKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdentityKeyPair(<private>)")
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify a meta-transaction signature against a claimed signer identity.
///
/// Returns `Ok(())` only if `signer` is a valid Ed25519 verifying key
/// and `signature` is valid over `digest` under it. The null identity
/// is rejected before any curve arithmetic.
pub fn verify(
    digest: &MessageDigest,
    signature: &MetaSignature,
    signer: &IdentityId,
) -> Result<(), CryptoError> {
    if signer.is_zero() {
        return Err(CryptoError::VerificationFailed(
            "null identity cannot sign".to_string(),
        ));
    }
    let verifying_key = ed25519_dalek::VerifyingKey::from_bytes(signer.as_bytes())
        .map_err(|e| CryptoError::KeyError(format!("invalid identity key: {e}")))?;
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key
        .verify(digest.as_bytes(), &sig)
        .map_err(|e| CryptoError::VerificationFailed(format!("Ed25519 verification failed: {e}")))
}
