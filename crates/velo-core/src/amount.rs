//! # Amount — Native-Unit Value Newtype
//!
//! Wraps the ledger's native unit (the smallest denomination, as an
//! unsigned 128-bit integer). Arithmetic is explicit and checked; there
//! is no `Add` impl, so balance updates must go through `checked_add`
//! and state their overflow handling.

use serde::{Deserialize, Serialize};

/// A value in the ledger's native unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Amount(pub u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Construct an amount from native units.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// The raw native-unit value.
    pub const fn units(&self) -> u128 {
        self.0
    }

    /// Whether the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction; `None` on underflow.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
