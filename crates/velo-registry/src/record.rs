//! # Asset Records
//!
//! The descriptive and lifecycle data held per registered asset. The
//! descriptive fields are immutable after creation; only the lifecycle
//! state (and, were a transfer operation ever added, the owner) may
//! change. Records are never destroyed — the registry is append-only.

use serde::{Deserialize, Serialize};

use velo_core::{Fingerprint, IdentityId};

use crate::lifecycle::AssetState;

/// The attribute triple that identifies an asset.
///
/// Each field may be empty; the triple as a whole must be unique. The
/// fingerprint is derived from exactly these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAttributes {
    /// Manufacturer or vendor name.
    pub vendor: String,
    /// Vendor-assigned serial number.
    pub serial_number: String,
    /// Secondary identifier stamped on the frame.
    pub frame_number: String,
}

impl AssetAttributes {
    /// Bundle an attribute triple.
    pub fn new(
        vendor: impl Into<String>,
        serial_number: impl Into<String>,
        frame_number: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            serial_number: serial_number.into(),
            frame_number: frame_number.into(),
        }
    }

    /// Derive the fingerprint for this triple.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::derive(&self.vendor, &self.serial_number, &self.frame_number)
    }
}

/// One registered asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    /// The derived unique identifier; immutable, the store's key.
    pub fingerprint: Fingerprint,
    /// Descriptive attributes; immutable after creation.
    pub attributes: AssetAttributes,
    /// Content-hash reference to off-registry media (e.g. a photo).
    pub media_hash: String,
    /// Current lifecycle state.
    pub state: AssetState,
    /// The owning identity, set at registration.
    pub owner: IdentityId,
}

impl AssetRecord {
    /// Create a fresh record in the lifecycle's initial state.
    pub fn new(attributes: AssetAttributes, media_hash: String, owner: IdentityId) -> Self {
        Self {
            fingerprint: attributes.fingerprint(),
            attributes,
            media_hash,
            state: AssetState::INITIAL,
            owner,
        }
    }
}
