//! # Ledger Capability
//!
//! The registry never touches value-transfer primitives directly. All
//! native-unit movement goes through the `Ledger` trait, implemented by
//! an adapter over whatever execution environment hosts the registry.
//! This keeps the reentrancy-ordering contract of treasury withdrawal
//! testable with an in-memory ledger.

use velo_core::{Amount, IdentityId, LedgerError};

/// Value-movement capability of the hosting execution environment.
///
/// `credit` records value arriving with a call (a payable registration),
/// `debit` releases held value, and `transfer_out` sends held value to a
/// recipient identity. Implementations must apply each call atomically.
pub trait Ledger {
    /// Record `amount` of incoming value as held by the registry.
    fn credit(&mut self, amount: Amount) -> Result<(), LedgerError>;

    /// Release `amount` of held value.
    fn debit(&mut self, amount: Amount) -> Result<(), LedgerError>;

    /// Send `amount` of held value to `recipient`.
    fn transfer_out(&mut self, recipient: &IdentityId, amount: Amount) -> Result<(), LedgerError>;
}

/// In-memory ledger for tests: tracks held balance and completed
/// outbound transfers, and can be armed to refuse the next transfer.
#[derive(Debug, Default)]
pub struct MockLedger {
    held: Amount,
    transfers: Vec<(IdentityId, Amount)>,
    refuse_next_transfer: bool,
}

impl MockLedger {
    /// Create an empty mock ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance currently held by the registry.
    pub fn held(&self) -> Amount {
        self.held
    }

    /// Completed outbound transfers, in order.
    pub fn transfers(&self) -> &[(IdentityId, Amount)] {
        &self.transfers
    }

    /// Make the next `transfer_out` fail, modeling a recipient that
    /// refuses payment.
    pub fn refuse_next_transfer(&mut self) {
        self.refuse_next_transfer = true;
    }
}

impl Ledger for MockLedger {
    fn credit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        self.held = self
            .held
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }

    fn debit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        self.held = self
            .held
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.held,
            })?;
        Ok(())
    }

    fn transfer_out(&mut self, recipient: &IdentityId, amount: Amount) -> Result<(), LedgerError> {
        if self.refuse_next_transfer {
            self.refuse_next_transfer = false;
            return Err(LedgerError::TransferRejected(
                "recipient refused payment".to_string(),
            ));
        }
        self.debit(amount)?;
        self.transfers.push((*recipient, amount));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(byte: u8) -> IdentityId {
        IdentityId::from_bytes([byte; 32])
    }

    #[test]
    fn test_credit_and_transfer() {
        let mut ledger = MockLedger::new();
        ledger.credit(Amount::new(100)).unwrap();
        ledger.transfer_out(&identity(1), Amount::new(60)).unwrap();
        assert_eq!(ledger.held(), Amount::new(40));
        assert_eq!(ledger.transfers(), &[(identity(1), Amount::new(60))]);
    }

    #[test]
    fn test_overdraw_rejected() {
        let mut ledger = MockLedger::new();
        ledger.credit(Amount::new(10)).unwrap();
        let err = ledger.debit(Amount::new(11)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(ledger.held(), Amount::new(10));
    }

    #[test]
    fn test_refused_transfer_leaves_balance() {
        let mut ledger = MockLedger::new();
        ledger.credit(Amount::new(50)).unwrap();
        ledger.refuse_next_transfer();
        assert!(ledger.transfer_out(&identity(1), Amount::new(50)).is_err());
        assert_eq!(ledger.held(), Amount::new(50));
        assert!(ledger.transfers().is_empty());

        // Only the next transfer is refused.
        ledger.transfer_out(&identity(1), Amount::new(50)).unwrap();
        assert_eq!(ledger.held(), Amount::ZERO);
    }
}
