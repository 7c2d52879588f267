//! The verification side of the receipt protocol.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use veriseal_core::{signed_message, Ed25519PublicKey, Ed25519Signature, Receipt, TIMESTAMP_FORMAT};

/// Default freshness window, in seconds.
pub const DEFAULT_MAX_AGE_SECS: i64 = 60;

/// Why a receipt failed verification.
///
/// Most callers only see the boolean from [`ReceiptVerifier::verify`];
/// this is the structured reason behind it, available through
/// [`ReceiptVerifier::validate_at`] when diagnostics are needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyFailure {
    /// Signature field is not valid hex of the expected length.
    #[error("malformed signature encoding")]
    MalformedSignature,

    /// Signature does not match the reconstructed signed message.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// Timestamp does not match the receipt timestamp format.
    #[error("malformed timestamp")]
    MalformedTimestamp,

    /// Structurally valid and correctly signed, but outside the window.
    #[error("receipt is {age_seconds}s old, window is {max_age_seconds}s")]
    Stale {
        age_seconds: i64,
        max_age_seconds: i64,
    },

    /// Signed message could not be reconstructed.
    #[error("malformed receipt: {0}")]
    Malformed(String),
}

/// Verifies receipts holding only the public key.
///
/// A separate capability from [`crate::ReceiptSigner`]: remote parties
/// construct one from the published key and never touch private
/// material. Stateless beyond the key; concurrent calls need no
/// coordination.
#[derive(Debug, Clone)]
pub struct ReceiptVerifier {
    public_key: Ed25519PublicKey,
}

impl ReceiptVerifier {
    /// Create a verifier from a public key.
    pub fn new(public_key: Ed25519PublicKey) -> Self {
        Self { public_key }
    }

    /// The verification key.
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// Verify signature and freshness against the current clock.
    ///
    /// Failure is data, not an exceptional condition: tampered, expired,
    /// and malformed receipts all collapse to `false`.
    pub fn verify(&self, receipt: &Receipt, max_age_seconds: i64) -> bool {
        self.verify_at(receipt, max_age_seconds, Utc::now())
    }

    /// Verify against an explicit clock reading.
    pub fn verify_at(&self, receipt: &Receipt, max_age_seconds: i64, now: DateTime<Utc>) -> bool {
        match self.validate_at(receipt, max_age_seconds, now) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(%reason, "receipt rejected");
                false
            }
        }
    }

    /// Full validation with a structured failure reason.
    ///
    /// The boolean predicates above are thin wrappers over this.
    pub fn validate_at(
        &self,
        receipt: &Receipt,
        max_age_seconds: i64,
        now: DateTime<Utc>,
    ) -> Result<(), VerifyFailure> {
        let signature = Ed25519Signature::from_hex(&receipt.signature)
            .map_err(|_| VerifyFailure::MalformedSignature)?;

        // Must reconstruct with the identical encoder and field set used
        // at signing, or every valid receipt fails.
        let message =
            signed_message(&receipt.header).map_err(|e| VerifyFailure::Malformed(e.to_string()))?;

        self.public_key
            .verify(&message, &signature)
            .map_err(|_| VerifyFailure::SignatureMismatch)?;

        let signed_at = NaiveDateTime::parse_from_str(receipt.timestamp(), TIMESTAMP_FORMAT)
            .map_err(|_| VerifyFailure::MalformedTimestamp)?
            .and_utc();

        // Whole seconds; a future-dated timestamp yields a negative age
        // and passes.
        let age_seconds = (now - signed_at).num_seconds();
        if age_seconds > max_age_seconds {
            return Err(VerifyFailure::Stale {
                age_seconds,
                max_age_seconds,
            });
        }

        Ok(())
    }
}
