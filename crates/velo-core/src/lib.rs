//! # velo-core — Foundational Types for the Velo Registry
//!
//! This crate is the bedrock of the Velo asset registry. It defines the
//! type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Fingerprint`,
//!    `IdentityId`, `RegistryId`, `Amount` — no bare strings or integers
//!    for identifiers and money.
//!
//! 2. **`CanonicalFields` newtype.** ALL digest computation flows through
//!    `CanonicalFields`: a length-prefixed, domain-tagged field framing
//!    that makes distinct field tuples produce distinct byte sequences.
//!    No hashing of naively concatenated strings. Ever.
//!
//! 3. **One caller-facing error enum.** `RegistryError` carries every
//!    failure a registry caller can observe, with the offending values
//!    attached. A failed operation leaves all registry state untouched.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `velo-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and serialize through serde.

pub mod amount;
pub mod canonical;
pub mod error;
pub mod fingerprint;
pub mod identity;

pub(crate) mod hex;

// Re-export primary types for ergonomic imports.
pub use amount::Amount;
pub use canonical::{sha256_digest, CanonicalFields};
pub use error::{CryptoError, LedgerError, RegistryError};
pub use fingerprint::Fingerprint;
pub use identity::{IdentityId, RegistryId};
