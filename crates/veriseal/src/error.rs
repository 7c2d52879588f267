//! Error types for signing.

use thiserror::Error;
use veriseal_core::CoreError;

/// Errors that abort a signing call.
///
/// A receipt over mis-encoded data would be a false attestation, so
/// encoding failures propagate instead of producing a degraded receipt.
#[derive(Debug, Error)]
pub enum SignError {
    /// The payload could not be canonically encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] CoreError),

    /// Key material handed in at construction could not be parsed.
    #[error("invalid key material: {0}")]
    InvalidKey(String),
}

/// Result type for signing operations.
pub type Result<T> = std::result::Result<T, SignError>;
