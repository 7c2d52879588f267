//! Receipt: the signed attestation over a set of action results.
//!
//! A receipt is an immutable value. Once signed it is never edited;
//! verification never mutates it.

use serde::{Deserialize, Serialize};

use crate::canonical::signed_message;
use crate::error::CoreError;

/// Sentinel carried in `ui_hash` when the caller supplies no UI digest.
pub const UI_HASH_NONE: &str = "sha256:none";

/// Timestamp wire format: UTC, second precision, `Z`-suffixed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Nonce wire length: 16 bytes, hex-encoded.
pub const NONCE_HEX_LEN: usize = 32;

/// Signature wire length: 64 bytes, hex-encoded.
pub const SIGNATURE_HEX_LEN: usize = 128;

/// The signed portion of a receipt: every wire field except the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptHeader {
    /// Digest of the canonical payload bytes, as `sha256:<hex64>`.
    pub state_hash: String,

    /// Caller-supplied secondary digest, or [`UI_HASH_NONE`].
    pub ui_hash: String,

    /// Signing wall-clock time in [`TIMESTAMP_FORMAT`].
    pub timestamp: String,

    /// 32 lowercase hex characters of CSPRNG output, unique per signing.
    pub nonce: String,
}

impl ReceiptHeader {
    /// The exact bytes the signature covers.
    pub fn signed_message(&self) -> Result<Vec<u8>, CoreError> {
        signed_message(self)
    }
}

/// A complete receipt: the signed header plus its signature.
///
/// Serializes as a flat five-field object; the field names and formats
/// are the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// The signed fields.
    #[serde(flatten)]
    pub header: ReceiptHeader,

    /// Ed25519 signature over the canonical header encoding, 128 hex chars.
    pub signature: String,
}

impl Receipt {
    /// Get the payload digest string.
    pub fn state_hash(&self) -> &str {
        &self.header.state_hash
    }

    /// Get the UI digest string (or the sentinel).
    pub fn ui_hash(&self) -> &str {
        &self.header.ui_hash
    }

    /// Get the signing timestamp string.
    pub fn timestamp(&self) -> &str {
        &self.header.timestamp
    }

    /// Get the anti-replay nonce.
    pub fn nonce(&self) -> &str {
        &self.header.nonce
    }

    /// Check whether the caller supplied a UI digest at signing time.
    pub fn has_ui_digest(&self) -> bool {
        self.header.ui_hash != UI_HASH_NONE
    }
}
