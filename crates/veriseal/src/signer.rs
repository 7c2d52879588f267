//! The signing side of the receipt protocol.

use chrono::{DateTime, Utc};
use serde_json::Value;

use veriseal_core::{
    canonical_json_bytes, signed_message, Ed25519PublicKey, Keypair, Nonce, Receipt,
    ReceiptHeader, Sha256Digest, TIMESTAMP_FORMAT, UI_HASH_NONE,
};

use crate::error::{Result, SignError};
use crate::verifier::ReceiptVerifier;

/// Issues signed receipts over action result payloads.
///
/// Holds the keypair for its entire lifetime; the key material is
/// injected fully formed at construction and never read from the
/// environment here. Stateless beyond the keypair, so concurrent
/// `sign` calls need no coordination.
pub struct ReceiptSigner {
    keypair: Keypair,
}

impl ReceiptSigner {
    /// Create a signer around an existing keypair.
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Create a signer from a hex-encoded 32-byte seed.
    pub fn from_seed_hex(seed_hex: &str) -> Result<Self> {
        let keypair =
            Keypair::from_hex(seed_hex).map_err(|e| SignError::InvalidKey(e.to_string()))?;
        Ok(Self::new(keypair))
    }

    /// The public verification key for receipts issued by this signer.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Derive a verifier capability holding only the public key.
    pub fn verifier(&self) -> ReceiptVerifier {
        ReceiptVerifier::new(self.public_key())
    }

    /// Sign a result payload, returning the five-field receipt.
    ///
    /// `ui_digest` is a precomputed digest string supplied by the caller;
    /// when absent the `ui_hash` field carries the `sha256:none` sentinel.
    /// Encoding failures abort the call; there is no partial receipt.
    pub fn sign(&self, payload: &Value, ui_digest: Option<&str>) -> Result<Receipt> {
        self.sign_at(payload, ui_digest, Utc::now())
    }

    /// Sign against an explicit clock reading.
    ///
    /// `sign` delegates here with the current time; tests use this seam
    /// to pin the timestamp.
    pub fn sign_at(
        &self,
        payload: &Value,
        ui_digest: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Receipt> {
        let payload_bytes = canonical_json_bytes(payload)?;
        let state_hash = Sha256Digest::hash(&payload_bytes).to_prefixed();

        let header = ReceiptHeader {
            state_hash,
            ui_hash: ui_digest.unwrap_or(UI_HASH_NONE).to_string(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            nonce: Nonce::generate().to_hex(),
        };

        let message = signed_message(&header)?;
        let signature = self.keypair.sign(&message);

        tracing::debug!(
            state_hash = %header.state_hash,
            timestamp = %header.timestamp,
            "signed receipt"
        );

        Ok(Receipt {
            header,
            signature: signature.to_hex(),
        })
    }
}

impl std::fmt::Debug for ReceiptSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReceiptSigner({:?})", self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use veriseal_core::{CoreError, MAX_DEPTH, NONCE_HEX_LEN, SIGNATURE_HEX_LEN};

    fn test_signer() -> ReceiptSigner {
        ReceiptSigner::new(Keypair::from_seed(&[0x42; 32]))
    }

    #[test]
    fn test_sign_fills_all_fields() {
        let signer = test_signer();
        let receipt = signer.sign(&json!([{"id": "test"}]), None).unwrap();

        assert!(receipt.state_hash().starts_with("sha256:"));
        assert_eq!(receipt.state_hash().len(), "sha256:".len() + 64);
        assert_eq!(receipt.ui_hash(), UI_HASH_NONE);
        assert_eq!(receipt.nonce().len(), NONCE_HEX_LEN);
        assert_eq!(receipt.signature.len(), SIGNATURE_HEX_LEN);
        assert!(receipt.timestamp().ends_with('Z'));
    }

    #[test]
    fn test_ui_digest_passthrough() {
        let signer = test_signer();
        let ui = format!("sha256:{}", "ab".repeat(32));
        let receipt = signer.sign(&json!({}), Some(&ui)).unwrap();

        assert_eq!(receipt.ui_hash(), ui);
        assert!(receipt.has_ui_digest());
    }

    #[test]
    fn test_state_hash_deterministic_across_signings() {
        let signer = test_signer();
        let r1 = signer.sign(&json!({"a": 1, "b": 2}), None).unwrap();
        let r2 = signer.sign(&json!({"b": 2, "a": 1}), None).unwrap();

        assert_eq!(r1.state_hash(), r2.state_hash());
    }

    #[test]
    fn test_nonce_unique_per_signing() {
        let signer = test_signer();
        let payload = json!([{"id": "test"}]);
        let r1 = signer.sign(&payload, None).unwrap();
        let r2 = signer.sign(&payload, None).unwrap();

        assert_ne!(r1.nonce(), r2.nonce());
        assert_ne!(r1.signature, r2.signature);
        assert_eq!(r1.state_hash(), r2.state_hash());
    }

    #[test]
    fn test_timestamp_second_precision() {
        let signer = test_signer();
        let now = "2026-08-29T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
            + chrono::Duration::milliseconds(750);
        let receipt = signer.sign_at(&json!(null), None, now).unwrap();

        assert_eq!(receipt.timestamp(), "2026-08-29T12:00:00Z");
    }

    #[test]
    fn test_encoding_error_aborts_signing() {
        let signer = test_signer();
        let mut payload = json!(1);
        for _ in 0..(MAX_DEPTH + 1) {
            payload = json!([payload]);
        }

        let result = signer.sign(&payload, None);
        assert!(matches!(
            result,
            Err(SignError::Encoding(CoreError::DepthExceeded(_)))
        ));
    }

    #[test]
    fn test_from_seed_hex() {
        let signer = ReceiptSigner::from_seed_hex(&hex::encode([0x42u8; 32])).unwrap();
        assert_eq!(signer.public_key(), test_signer().public_key());

        assert!(matches!(
            ReceiptSigner::from_seed_hex("too-short"),
            Err(SignError::InvalidKey(_))
        ));
    }
}
