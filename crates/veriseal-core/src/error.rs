//! Error types for the Veriseal core.

use thiserror::Error;

/// Core errors that can occur during encoding and key handling.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("non-finite number cannot be canonically encoded")]
    NonFiniteNumber,

    #[error("value nesting exceeds maximum depth of {0}")]
    DepthExceeded(usize),
}
