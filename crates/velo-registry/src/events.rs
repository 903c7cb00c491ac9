//! # Registry Events
//!
//! The registry's sole notification mechanism. Events are appended, in
//! operation order, to an injected `EventSink` — there are no callbacks,
//! and the core never reads its own events back.

use serde::{Deserialize, Serialize};

use velo_core::{Fingerprint, IdentityId};

use crate::lifecycle::AssetState;
use crate::record::AssetAttributes;

/// An observable registry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new asset record was created.
    AssetRegistered {
        /// The new record's fingerprint.
        fingerprint: Fingerprint,
        /// The beneficiary recorded as owner.
        owner: IdentityId,
        /// The descriptive attribute triple.
        attributes: AssetAttributes,
        /// Content-hash reference to off-registry media.
        media_hash: String,
    },
    /// An asset's lifecycle state was overwritten.
    StateChanged {
        /// The mutated record.
        fingerprint: Fingerprint,
        /// State before the transition.
        from: AssetState,
        /// State after the transition.
        to: AssetState,
        /// The identity whose authority the transition ran under (the
        /// direct caller, or the verified meta-transaction signer).
        acting_identity: IdentityId,
    },
}

/// Append-only event consumer injected into the registry.
pub trait EventSink {
    /// Append one event. Must not fail; sinks that buffer or forward
    /// handle their own delivery concerns.
    fn emit(&mut self, event: RegistryEvent);
}

/// Sink that records every event in order, for tests and local use.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<RegistryEvent>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted so far, in order.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: RegistryEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let mut sink = RecordingSink::new();
        let fp = Fingerprint::derive("a", "b", "c");
        let owner = IdentityId::from_bytes([1u8; 32]);

        sink.emit(RegistryEvent::AssetRegistered {
            fingerprint: fp,
            owner,
            attributes: AssetAttributes::new("a", "b", "c"),
            media_hash: "ipfs-hash".to_string(),
        });
        sink.emit(RegistryEvent::StateChanged {
            fingerprint: fp,
            from: AssetState::Registered,
            to: AssetState::Stolen,
            acting_identity: owner,
        });

        assert_eq!(sink.events().len(), 2);
        assert!(matches!(
            sink.events()[0],
            RegistryEvent::AssetRegistered { .. }
        ));
        assert!(matches!(
            sink.events()[1],
            RegistryEvent::StateChanged { .. }
        ));
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = RegistryEvent::StateChanged {
            fingerprint: Fingerprint::derive("v", "s", "f"),
            from: AssetState::Stolen,
            to: AssetState::Recovered,
            acting_identity: IdentityId::from_bytes([5u8; 32]),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: RegistryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
