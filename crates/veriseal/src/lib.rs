//! # Veriseal
//!
//! Signed action receipts with bounded-freshness verification.
//!
//! ## Overview
//!
//! A service that executes actions can attest to the results it served:
//!
//! - **Receipts**: immutable, signed attestations tying a result
//!   payload's digest to a timestamp and an anti-replay nonce
//! - **Canonical encoding**: the same logical payload always hashes and
//!   signs identically, regardless of construction order
//! - **Freshness**: verification rejects receipts older than a bounded
//!   window, limiting replay exposure
//!
//! ## Key Concepts
//!
//! - **Receipt**: immutable. Never edited; verification never mutates.
//! - **Signer**: holds the keypair, injected at construction.
//! - **Verifier**: a separate capability needing only the public key.
//!
//! ## Usage
//!
//! ```rust
//! use veriseal::{ReceiptSigner, DEFAULT_MAX_AGE_SECS};
//! use veriseal::core::Keypair;
//! use serde_json::json;
//!
//! let signer = ReceiptSigner::new(Keypair::generate());
//! let receipt = signer
//!     .sign(&json!([{"id": "test"}]), None)
//!     .expect("payload is encodable");
//!
//! // Any holder of the public key can verify.
//! let verifier = signer.verifier();
//! assert!(verifier.verify(&receipt, DEFAULT_MAX_AGE_SECS));
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports `veriseal_core` as [`core`] for access to the
//! canonical encoder and crypto primitives.

pub mod error;
pub mod signer;
pub mod verifier;

// Re-export the primitives crate
pub use veriseal_core as core;

// Re-export main types for convenience
pub use error::{Result, SignError};
pub use signer::ReceiptSigner;
pub use verifier::{ReceiptVerifier, VerifyFailure, DEFAULT_MAX_AGE_SECS};

// Re-export commonly used core types
pub use veriseal_core::{
    Ed25519PublicKey, Ed25519Signature, Keypair, Receipt, ReceiptHeader, Sha256Digest,
    UI_HASH_NONE,
};
