//! # The Registry State Machine
//!
//! Owns all shared registry state — the asset record store, the
//! ownership index, the replay-nonce table, the registration price, and
//! the treasury accumulator — and exposes every caller-facing operation
//! over it. The hosting ledger environment executes operations one at a
//! time in a total order; here that is simply `&mut self`.
//!
//! Every operation validates fully before mutating anything, so a
//! failure of any kind leaves all state exactly as it was. The one
//! ordering subtlety is treasury withdrawal: the balance is zeroed
//! *before* the outbound transfer, so a reentrant recipient observes an
//! empty treasury and cannot double-spend it.

use std::collections::HashMap;

use velo_core::{Amount, Fingerprint, IdentityId, LedgerError, RegistryError, RegistryId};
use velo_crypto::{meta_update_digest, verify, MessageDigest, MetaSignature};

use crate::events::{EventSink, RegistryEvent};
use crate::ledger::Ledger;
use crate::lifecycle::AssetState;
use crate::meta::ReplayNonces;
use crate::ownership::OwnershipIndex;
use crate::record::{AssetAttributes, AssetRecord};

/// The registration price a fresh registry starts with, in native units
/// (0.003 of the ledger's major unit at 18 decimals).
pub const DEFAULT_REGISTRATION_PRICE: Amount = Amount::new(3_000_000_000_000_000);

/// The asset registry.
///
/// Generic over the [`Ledger`] capability of the hosting environment
/// and the [`EventSink`] consuming its notifications, so the core is
/// testable with in-memory implementations of both.
#[derive(Debug)]
pub struct Registry<L: Ledger, E: EventSink> {
    id: RegistryId,
    admin: IdentityId,
    price: Amount,
    treasury: Amount,
    records: HashMap<Fingerprint, AssetRecord>,
    ownership: OwnershipIndex,
    nonces: ReplayNonces,
    ledger: L,
    events: E,
}

impl<L: Ledger, E: EventSink> Registry<L, E> {
    /// Create a registry administered by `admin`, priced at
    /// [`DEFAULT_REGISTRATION_PRICE`].
    pub fn new(id: RegistryId, admin: IdentityId, ledger: L, events: E) -> Self {
        Self {
            id,
            admin,
            price: DEFAULT_REGISTRATION_PRICE,
            treasury: Amount::ZERO,
            records: HashMap::new(),
            ownership: OwnershipIndex::new(),
            nonces: ReplayNonces::new(),
            ledger,
            events,
        }
    }

    /// This registry instance's identifier (the domain-separation
    /// component of signable messages).
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// The administrator identity.
    pub fn admin(&self) -> IdentityId {
        self.admin
    }

    /// The injected event sink, for observers that need to read back
    /// what a recording sink captured.
    pub fn event_sink(&self) -> &E {
        &self.events
    }

    /// The injected ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register an asset for the caller's own account.
    ///
    /// Shorthand for [`Self::register_for`] with the caller as
    /// beneficiary.
    pub fn register(
        &mut self,
        caller: IdentityId,
        attributes: AssetAttributes,
        media_hash: impl Into<String>,
        payment: Amount,
    ) -> Result<Fingerprint, RegistryError> {
        self.register_for(caller, attributes, media_hash, payment, caller)
    }

    /// Register an asset with `beneficiary` as owner; any identity may
    /// pay.
    ///
    /// Fails with `InsufficientPayment` below the current price (excess
    /// payment is accepted and credited in full) and `DuplicateAsset`
    /// if the attribute triple is already registered. On success the
    /// record starts in the lifecycle's initial state, the ownership
    /// index is updated, the payment is credited to the treasury, and
    /// one `AssetRegistered` event is emitted.
    pub fn register_for(
        &mut self,
        payer: IdentityId,
        attributes: AssetAttributes,
        media_hash: impl Into<String>,
        payment: Amount,
        beneficiary: IdentityId,
    ) -> Result<Fingerprint, RegistryError> {
        if payment < self.price {
            return Err(RegistryError::InsufficientPayment {
                payment,
                price: self.price,
            });
        }
        let fingerprint = attributes.fingerprint();
        if self.records.contains_key(&fingerprint) {
            return Err(RegistryError::DuplicateAsset { fingerprint });
        }
        let credited = self
            .treasury
            .checked_add(payment)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.ledger.credit(payment)?;
        self.treasury = credited;

        let media_hash = media_hash.into();
        let record = AssetRecord::new(attributes.clone(), media_hash.clone(), beneficiary);
        self.records.insert(fingerprint, record);
        self.ownership.record_ownership(beneficiary, fingerprint);
        self.events.emit(RegistryEvent::AssetRegistered {
            fingerprint,
            owner: beneficiary,
            attributes,
            media_hash,
        });
        tracing::info!(
            fingerprint = %fingerprint,
            owner = %beneficiary,
            payer = %payer,
            payment = %payment,
            "asset registered"
        );
        Ok(fingerprint)
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// The record for `fingerprint`, or `NotFound`.
    pub fn record(&self, fingerprint: &Fingerprint) -> Result<&AssetRecord, RegistryError> {
        self.records
            .get(fingerprint)
            .ok_or(RegistryError::NotFound {
                fingerprint: *fingerprint,
            })
    }

    /// The record for an attribute triple, re-deriving its fingerprint.
    pub fn record_by_attributes(
        &self,
        vendor: &str,
        serial_number: &str,
        frame_number: &str,
    ) -> Result<&AssetRecord, RegistryError> {
        let fingerprint = Fingerprint::derive(vendor, serial_number, frame_number);
        self.record(&fingerprint)
    }

    /// Iterate the fingerprints owned by `identity`, in registration
    /// order. Empty for identities with no assets; never fails.
    pub fn assets_of(&self, identity: &IdentityId) -> impl Iterator<Item = &Fingerprint> + '_ {
        self.ownership.assets_of(identity)
    }

    // ── Lifecycle transitions ────────────────────────────────────────

    /// Overwrite an asset's lifecycle state under the caller's own
    /// authority.
    ///
    /// Check order: `NotFound`, then `InvalidState` for codes outside
    /// the lifecycle set, then `NotOwner` unless the caller owns the
    /// record. On success the state is overwritten (no adjacency
    /// restriction) and a `StateChanged` event is emitted.
    pub fn update_state(
        &mut self,
        caller: IdentityId,
        fingerprint: Fingerprint,
        new_state: u8,
    ) -> Result<(), RegistryError> {
        let (from, to) = self.authorize_state_change(&fingerprint, new_state, &caller)?;
        self.apply_state_change(fingerprint, from, to, caller);
        Ok(())
    }

    /// Build the digest a signer must sign to authorize
    /// [`Self::meta_update_state`] for the given arguments.
    ///
    /// Pure: incorporates this registry's id, the fingerprint, the
    /// state code, and the nonce, under the versioned meta-update
    /// domain tag.
    pub fn signable_message(
        &self,
        fingerprint: &Fingerprint,
        new_state: u8,
        nonce: u64,
    ) -> MessageDigest {
        meta_update_digest(&self.id, fingerprint, new_state, nonce)
    }

    /// Apply a state change authorized by the signer's signature and
    /// submitted by an arbitrary relayer.
    ///
    /// The relayer carries no authority: the signature is verified
    /// against `signer` over the recomputed message digest
    /// (`InvalidSignature` on failure or for the null identity), the
    /// nonce must equal the signer's counter exactly
    /// (`ReplayDetected` otherwise), and the signer must pass the same
    /// ownership check as a direct caller. The nonce increment and the
    /// state mutation happen together after all checks, so any failure
    /// leaves both untouched.
    pub fn meta_update_state(
        &mut self,
        signature: &MetaSignature,
        signer: IdentityId,
        fingerprint: Fingerprint,
        new_state: u8,
        nonce: u64,
        relayer: IdentityId,
    ) -> Result<(), RegistryError> {
        let digest = self.signable_message(&fingerprint, new_state, nonce);
        verify(&digest, signature, &signer).map_err(|_| RegistryError::InvalidSignature)?;
        if !self.nonces.matches(&signer, nonce) {
            return Err(RegistryError::ReplayDetected {
                presented: nonce,
                expected: self.nonces.current(&signer),
            });
        }
        let (from, to) = self.authorize_state_change(&fingerprint, new_state, &signer)?;
        self.nonces.consume(&signer);
        self.apply_state_change(fingerprint, from, to, signer);
        tracing::debug!(
            signer = %signer,
            relayer = %relayer,
            nonce,
            "meta-transaction applied"
        );
        Ok(())
    }

    /// The nonce `identity`'s next meta-transaction must name.
    pub fn current_nonce(&self, identity: &IdentityId) -> u64 {
        self.nonces.current(identity)
    }

    // ── Fees & treasury ──────────────────────────────────────────────

    /// The current registration price.
    pub fn price(&self) -> Amount {
        self.price
    }

    /// Overwrite the registration price. Admin only; zero is allowed.
    pub fn set_price(
        &mut self,
        caller: IdentityId,
        new_price: Amount,
    ) -> Result<(), RegistryError> {
        self.require_admin(&caller)?;
        self.price = new_price;
        Ok(())
    }

    /// The accumulated, not-yet-withdrawn registration fees.
    pub fn treasury_balance(&self) -> Amount {
        self.treasury
    }

    /// Send the entire treasury balance to `recipient`. Admin only.
    ///
    /// The balance is zeroed before the transfer is attempted: a
    /// recipient that reenters the registry mid-transfer observes an
    /// empty treasury. If the environment refuses the transfer, the
    /// balance is restored and the call fails wholesale.
    pub fn withdraw(
        &mut self,
        caller: IdentityId,
        recipient: IdentityId,
    ) -> Result<(), RegistryError> {
        self.require_admin(&caller)?;
        let amount = std::mem::take(&mut self.treasury);
        if let Err(e) = self.ledger.transfer_out(&recipient, amount) {
            self.treasury = amount;
            return Err(e.into());
        }
        tracing::info!(recipient = %recipient, amount = %amount, "treasury withdrawn");
        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────

    /// Validate a state change without mutating anything.
    ///
    /// Shared by the direct and meta-transaction paths so both enforce
    /// the same checks in the same order.
    fn authorize_state_change(
        &self,
        fingerprint: &Fingerprint,
        new_state: u8,
        acting: &IdentityId,
    ) -> Result<(AssetState, AssetState), RegistryError> {
        let record = self.record(fingerprint)?;
        let to = AssetState::from_code(new_state)
            .ok_or(RegistryError::InvalidState { code: new_state })?;
        if record.owner != *acting {
            return Err(RegistryError::NotOwner {
                acting: *acting,
                fingerprint: *fingerprint,
            });
        }
        Ok((record.state, to))
    }

    /// Apply an already-authorized state change and emit the event.
    fn apply_state_change(
        &mut self,
        fingerprint: Fingerprint,
        from: AssetState,
        to: AssetState,
        acting: IdentityId,
    ) {
        if let Some(record) = self.records.get_mut(&fingerprint) {
            record.state = to;
        }
        self.events.emit(RegistryEvent::StateChanged {
            fingerprint,
            from,
            to,
            acting_identity: acting,
        });
        tracing::info!(
            fingerprint = %fingerprint,
            from = %from,
            to = %to,
            acting = %acting,
            "asset state changed"
        );
    }

    fn require_admin(&self, acting: &IdentityId) -> Result<(), RegistryError> {
        if *acting != self.admin {
            return Err(RegistryError::NotAdmin { acting: *acting });
        }
        Ok(())
    }
}
