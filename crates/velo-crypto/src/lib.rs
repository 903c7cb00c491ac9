//! # velo-crypto — Cryptographic Layer for the Velo Registry
//!
//! Provides the cryptographic building blocks for meta-transaction
//! authorization:
//!
//! - **Identity keys** (`ed25519.rs`): Ed25519 key pairs whose verifying
//!   key *is* the registry identity, plus signing and verification over
//!   meta-transaction message digests.
//! - **Signable messages** (`message.rs`): deterministic, domain-separated
//!   digest construction for state-change requests.
//!
//! ## Crate Policy
//!
//! - Depends only on `velo-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   digests and real Ed25519.
//! - Private keys are never serialized and never appear in `Debug` output.

pub mod ed25519;
pub mod message;

pub use ed25519::{verify, IdentityKeyPair, MetaSignature};
pub use message::{meta_update_digest, MessageDigest, META_UPDATE_DOMAIN};
