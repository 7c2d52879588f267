//! # Veriseal Testkit
//!
//! Testing utilities for Veriseal.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known canonical encodings and digests for
//!   cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors lock the canonical form across implementations:
//!
//! ```rust
//! use veriseal_testkit::vectors::verify_all_vectors;
//!
//! assert!(verify_all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use veriseal_testkit::generators::{receipt_from_params, ReceiptParams};
//!
//! proptest! {
//!     #[test]
//!     fn state_hash_is_deterministic(params: ReceiptParams) {
//!         let r1 = receipt_from_params(&params);
//!         let r2 = receipt_from_params(&params);
//!         prop_assert_eq!(r1.state_hash(), r2.state_hash());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use veriseal_testkit::fixtures::{sample_results, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let receipt = fixture.sign(&sample_results());
//! assert!(fixture.verifier.verify(&receipt, 60));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, sample_results, TestFixture};
pub use generators::{receipt_from_params, ReceiptParams};
pub use vectors::{all_vectors, encode_vector, verify_all_vectors, GoldenVector};
