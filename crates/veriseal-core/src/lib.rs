//! # Veriseal Core
//!
//! Pure primitives for Veriseal: receipts, canonical JSON, and signing keys.
//!
//! This crate contains no I/O, no clock, and no entropy reads beyond key
//! and nonce construction helpers. It is pure computation over
//! cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Receipt`] - The signed attestation over a set of action results
//! - [`ReceiptHeader`] - The four signed fields, signature excluded
//! - [`Keypair`] - Ed25519 signing key wrapper
//! - [`Sha256Digest`] - Payload digest in the `sha256:<hex>` wire form
//!
//! ## Canonicalization
//!
//! All signed bytes are produced by the canonical JSON encoder. See the
//! [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod receipt;

pub use canonical::{canonical_json_bytes, signed_message, MAX_DEPTH};
pub use crypto::{
    Ed25519PublicKey, Ed25519Signature, Keypair, Nonce, Sha256Digest, DIGEST_PREFIX,
};
pub use error::CoreError;
pub use receipt::{
    Receipt, ReceiptHeader, NONCE_HEX_LEN, SIGNATURE_HEX_LEN, TIMESTAMP_FORMAT, UI_HASH_NONE,
};
