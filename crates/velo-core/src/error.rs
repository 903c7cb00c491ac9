//! # Error Types — Caller-Facing Failure Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Every `RegistryError` is synchronous and non-retryable without
//!   changing the call's arguments; a failed operation leaves all
//!   registry state exactly as it was.
//! - Errors carry the offending values (the presented nonce, the
//!   rejected state code) so callers can correct and resubmit.
//! - Cryptographic and ledger failures have their own enums and fold
//!   into `RegistryError` at the registry boundary.

use thiserror::Error;

use crate::amount::Amount;
use crate::fingerprint::Fingerprint;
use crate::identity::IdentityId;

/// A failure observable by a registry caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Registration payment below the current price.
    #[error("payment {payment} below registration price {price}")]
    InsufficientPayment {
        /// The payment offered.
        payment: Amount,
        /// The price in force at the time of the call.
        price: Amount,
    },

    /// An asset record already exists for the derived fingerprint.
    #[error("asset already registered: {fingerprint}")]
    DuplicateAsset {
        /// The colliding fingerprint.
        fingerprint: Fingerprint,
    },

    /// No asset record exists for the fingerprint.
    #[error("no asset record for {fingerprint}")]
    NotFound {
        /// The missing fingerprint.
        fingerprint: Fingerprint,
    },

    /// The state code is outside the closed lifecycle set.
    #[error("state code {code} is outside the lifecycle set")]
    InvalidState {
        /// The rejected code.
        code: u8,
    },

    /// The acting identity does not own the asset record.
    #[error("{acting} does not own {fingerprint}")]
    NotOwner {
        /// The identity that attempted the mutation.
        acting: IdentityId,
        /// The record it attempted to mutate.
        fingerprint: Fingerprint,
    },

    /// The acting identity is not the registry administrator.
    #[error("{acting} is not the registry administrator")]
    NotAdmin {
        /// The identity that attempted the privileged call.
        acting: IdentityId,
    },

    /// Signature verification failed or named the null identity.
    #[error("invalid meta-transaction signature")]
    InvalidSignature,

    /// The presented nonce does not equal the signer's expected nonce.
    #[error("replay detected: nonce {presented} does not match expected {expected}")]
    ReplayDetected {
        /// The nonce named in the signed message.
        presented: u64,
        /// The signer's current counter value.
        expected: u64,
    },

    /// The ledger environment rejected a value movement.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Error in cryptographic operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// Digest parsing failed.
    #[error("digest error: {0}")]
    DigestError(String),
}

/// Error raised by the `Ledger` capability.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// A debit or transfer exceeded the available balance.
    #[error("insufficient ledger funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// The amount the operation required.
        needed: Amount,
        /// The balance actually held.
        available: Amount,
    },

    /// A balance accumulator would overflow.
    #[error("ledger balance overflow")]
    BalanceOverflow,

    /// The execution environment refused the outbound transfer.
    #[error("transfer rejected: {0}")]
    TransferRejected(String),
}
