//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use veriseal::{Receipt, ReceiptSigner, ReceiptVerifier};
use veriseal_core::Keypair;

/// A test fixture with a keypair, signer, and matching verifier.
pub struct TestFixture {
    pub keypair: Keypair,
    pub signer: ReceiptSigner,
    pub verifier: ReceiptVerifier,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self::from_keypair(Keypair::generate())
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::from_keypair(Keypair::from_seed(&seed))
    }

    fn from_keypair(keypair: Keypair) -> Self {
        let signer = ReceiptSigner::new(keypair.clone());
        let verifier = signer.verifier();
        Self {
            keypair,
            signer,
            verifier,
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> veriseal_core::Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Sign a payload against the real clock.
    pub fn sign(&self, payload: &Value) -> Receipt {
        self.signer
            .sign(payload, None)
            .expect("fixture payload is encodable")
    }

    /// Sign a payload at a fixed instant.
    pub fn sign_at(&self, payload: &Value, now: DateTime<Utc>) -> Receipt {
        self.signer
            .sign_at(payload, None, now)
            .expect("fixture payload is encodable")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// A realistic action-result payload, shaped like a search response.
pub fn sample_results() -> Value {
    json!([
        {
            "publication_number": "US-2026-0000001",
            "title": "Method and System for distributed caching",
            "assignee": "Example Corp",
            "filing_date": "2026-01-04",
            "abstract": "A system for implementing distributed caching..."
        },
        {
            "publication_number": "US-2026-0000002",
            "title": "Method and System for receipt verification",
            "assignee": "Example Corp",
            "filing_date": "2026-01-04",
            "abstract": "A system for implementing receipt verification..."
        }
    ])
}
