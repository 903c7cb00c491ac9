//! # Ownership Index
//!
//! Maps each identity to the fingerprints it owns, in registration
//! order. A fingerprint is appended exactly once (the registry checks
//! record existence before recording ownership) and never moves — this
//! core defines no transfer operation.

use std::collections::HashMap;

use velo_core::{Fingerprint, IdentityId};

/// Per-identity insertion-ordered fingerprint collections.
#[derive(Debug, Clone, Default)]
pub struct OwnershipIndex {
    assets: HashMap<IdentityId, Vec<Fingerprint>>,
}

impl OwnershipIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fingerprint` to `identity`'s collection.
    ///
    /// The caller must have verified that no record exists for the
    /// fingerprint yet; this method does not re-check.
    pub fn record_ownership(&mut self, identity: IdentityId, fingerprint: Fingerprint) {
        self.assets.entry(identity).or_default().push(fingerprint);
    }

    /// Iterate the fingerprints owned by `identity`, in registration
    /// order.
    ///
    /// Never fails: an identity with no assets (including one never
    /// seen before) yields an empty iterator. The iterator borrows the
    /// index, so callers can restart it by calling again.
    pub fn assets_of(&self, identity: &IdentityId) -> std::slice::Iter<'_, Fingerprint> {
        self.assets
            .get(identity)
            .map(|fps| fps.as_slice())
            .unwrap_or(&[])
            .iter()
    }

    /// Number of assets owned by `identity`.
    pub fn count(&self, identity: &IdentityId) -> usize {
        self.assets.get(identity).map_or(0, Vec::len)
    }
}
