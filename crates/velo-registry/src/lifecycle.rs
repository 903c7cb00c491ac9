//! # Asset Lifecycle States
//!
//! The closed set of statuses an asset record can occupy.
//!
//! ```text
//! Registered(0)   Stolen(1)   Recovered(2)
//! ```
//!
//! There is no adjacency restriction: the owner may set any in-range
//! state from any other (an owner can re-flag a recovered asset as
//! stolen, or correct a mistaken flag back to registered). The real
//! guard is the caller authority check in the registry — only the
//! record's owner may transition it. Codes outside the set are rejected
//! regardless of caller.

use serde::{Deserialize, Serialize};

/// The lifecycle state of a registered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetState {
    /// Registered and in the owner's possession.
    Registered,
    /// Reported stolen by the owner.
    Stolen,
    /// Recovered after a theft report.
    Recovered,
}

impl AssetState {
    /// The state every record starts in.
    pub const INITIAL: AssetState = AssetState::Registered;

    /// Decode a wire-level state code; `None` for codes outside the set.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Registered),
            1 => Some(Self::Stolen),
            2 => Some(Self::Recovered),
            _ => None,
        }
    }

    /// The wire-level code of this state.
    pub fn code(&self) -> u8 {
        match self {
            Self::Registered => 0,
            Self::Stolen => 1,
            Self::Recovered => 2,
        }
    }

    /// Whether the asset is currently flagged as stolen.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Stolen)
    }
}

impl std::fmt::Display for AssetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Registered => "REGISTERED",
            Self::Stolen => "STOLEN",
            Self::Recovered => "RECOVERED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in 0..=2 {
            let state = AssetState::from_code(code).unwrap();
            assert_eq!(state.code(), code);
        }
    }

    #[test]
    fn test_out_of_range_codes_rejected() {
        assert_eq!(AssetState::from_code(3), None);
        assert_eq!(AssetState::from_code(255), None);
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(AssetState::INITIAL, AssetState::Registered);
        assert_eq!(AssetState::INITIAL.code(), 0);
    }

    #[test]
    fn test_flagged_predicate() {
        assert!(AssetState::Stolen.is_flagged());
        assert!(!AssetState::Registered.is_flagged());
        assert!(!AssetState::Recovered.is_flagged());
    }

    #[test]
    fn test_display() {
        assert_eq!(AssetState::Registered.to_string(), "REGISTERED");
        assert_eq!(AssetState::Stolen.to_string(), "STOLEN");
        assert_eq!(AssetState::Recovered.to_string(), "RECOVERED");
    }
}
