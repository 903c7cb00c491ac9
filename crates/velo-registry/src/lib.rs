//! # velo-registry — The Velo Asset Registry
//!
//! A registry binding a physical, serialized asset (canonically a
//! bicycle) to a single ownership record. Registration is gated behind a
//! fee; the owning identity moves the asset through a small lifecycle
//! (registered → stolen → recovered), either directly or through a
//! relayer carrying the owner's signed, replay-protected message.
//!
//! ## Modules
//!
//! - **Registry** (`registry.rs`): the state machine owning all shared
//!   state and exposing every caller-facing operation.
//! - **Lifecycle** (`lifecycle.rs`): the closed state set and its
//!   wire-level codes.
//! - **Records** (`record.rs`): immutable descriptive data per asset.
//! - **Ownership** (`ownership.rs`): per-identity, insertion-ordered
//!   fingerprint index.
//! - **Ledger** (`ledger.rs`): the value-movement capability the
//!   hosting environment implements; the core never touches transfer
//!   primitives directly.
//! - **Events** (`events.rs`): the append-only notification channel.
//! - **Replay nonces** (`meta.rs`): per-signer monotonic counters that
//!   make meta-transaction signatures single-use.
//!
//! ## Execution Model
//!
//! The hosting ledger environment runs state-mutating operations one at
//! a time in a total order; every registry operation is a synchronous
//! critical section over `&mut Registry` that either commits wholesale
//! or fails leaving all state untouched. The only reentrancy hazard —
//! treasury withdrawal transferring value to a hostile recipient — is
//! closed by zeroing the balance before the transfer.

pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod meta;
pub mod ownership;
pub mod record;
pub mod registry;

// ─── Registry re-exports ────────────────────────────────────────────

pub use registry::{Registry, DEFAULT_REGISTRATION_PRICE};

// ─── Supporting type re-exports ─────────────────────────────────────

pub use events::{EventSink, NullSink, RecordingSink, RegistryEvent};
pub use ledger::{Ledger, MockLedger};
pub use lifecycle::AssetState;
pub use meta::ReplayNonces;
pub use ownership::OwnershipIndex;
pub use record::{AssetAttributes, AssetRecord};

// ─── Foundation re-exports for downstream convenience ───────────────

pub use velo_core::{Amount, Fingerprint, IdentityId, RegistryError, RegistryId};
pub use velo_crypto::{IdentityKeyPair, MessageDigest, MetaSignature};
