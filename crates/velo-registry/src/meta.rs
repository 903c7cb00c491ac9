//! # Replay Nonces
//!
//! One monotonic counter per signer identity. A meta-transaction naming
//! nonce `n` is accepted only while `n` equals the signer's counter
//! exactly; acceptance advances the counter by one, so the same signed
//! message can never be accepted twice and signatures cannot be applied
//! out of order.

use std::collections::HashMap;

use velo_core::IdentityId;

/// Per-identity monotonic replay counters, implicitly zero for
/// identities never seen before.
#[derive(Debug, Clone, Default)]
pub struct ReplayNonces {
    counters: HashMap<IdentityId, u64>,
}

impl ReplayNonces {
    /// Create an empty nonce table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nonce the identity's next meta-transaction must name.
    pub fn current(&self, identity: &IdentityId) -> u64 {
        self.counters.get(identity).copied().unwrap_or(0)
    }

    /// Whether `presented` is the identity's expected next nonce.
    pub fn matches(&self, identity: &IdentityId, presented: u64) -> bool {
        presented == self.current(identity)
    }

    /// Advance the identity's counter by exactly one.
    ///
    /// Callers must have already checked [`Self::matches`]; consuming
    /// without a match would skip a value and strand outstanding
    /// signatures.
    pub fn consume(&mut self, identity: &IdentityId) {
        *self.counters.entry(*identity).or_insert(0) += 1;
    }
}
