//! Proptest generators for property-based testing.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use serde_json::Value;

use veriseal::{Receipt, ReceiptSigner};
use veriseal_core::Keypair;

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a scalar JSON value.
pub fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::String),
        "\\PC{0,8}".prop_map(Value::String),
    ]
}

/// Generate an arbitrary nested JSON value.
pub fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z0-9_]{1,8}", inner, 0..8)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Generate an optional caller-supplied UI digest string.
pub fn ui_digest() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[0-9a-f]{64}".prop_map(|hex| format!("sha256:{hex}")))
}

/// Generate a signing instant between the epoch and 2100.
pub fn signing_time() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| {
        DateTime::from_timestamp(secs, 0).expect("timestamp in range")
    })
}

/// Parameters for generating a signed receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub seed: [u8; 32],
    pub payload: Value,
    pub ui_digest: Option<String>,
    pub signed_at: DateTime<Utc>,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<[u8; 32]>(), json_value(), ui_digest(), signing_time())
            .prop_map(|(seed, payload, ui_digest, signed_at)| ReceiptParams {
                seed,
                payload,
                ui_digest,
                signed_at,
            })
            .boxed()
    }
}

/// Sign a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    let signer = ReceiptSigner::new(Keypair::from_seed(&params.seed));
    signer
        .sign_at(&params.payload, params.ui_digest.as_deref(), params.signed_at)
        .expect("generated payloads stay within encoder limits")
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriseal_core::canonical_json_bytes;

    proptest! {
        #[test]
        fn test_state_hash_deterministic(params: ReceiptParams) {
            let r1 = receipt_from_params(&params);
            let r2 = receipt_from_params(&params);

            prop_assert_eq!(r1.state_hash(), r2.state_hash());
            // Fresh entropy per signing call
            prop_assert_ne!(r1.nonce(), r2.nonce());
        }

        #[test]
        fn test_canonical_bytes_deterministic(payload in json_value()) {
            let b1 = canonical_json_bytes(&payload).unwrap();
            let b2 = canonical_json_bytes(&payload).unwrap();

            prop_assert_eq!(b1, b2);
        }

        #[test]
        fn test_canonical_bytes_ascii(payload in json_value()) {
            let bytes = canonical_json_bytes(&payload).unwrap();
            prop_assert!(bytes.is_ascii());
        }

        #[test]
        fn test_canonical_bytes_parse_back(payload in json_value()) {
            // Canonical form is itself valid JSON for the same value
            let bytes = canonical_json_bytes(&payload).unwrap();
            let reparsed: Value = serde_json::from_slice(&bytes).unwrap();
            prop_assert_eq!(&reparsed, &payload);
        }

        #[test]
        fn test_signed_receipts_verify(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let verifier = ReceiptSigner::new(Keypair::from_seed(&params.seed)).verifier();

            prop_assert!(verifier.verify_at(&receipt, 0, params.signed_at));
        }

        #[test]
        fn test_different_payloads_different_hashes(
            p1 in json_value(),
            p2 in json_value(),
        ) {
            prop_assume!(p1 != p2);

            let b1 = canonical_json_bytes(&p1).unwrap();
            let b2 = canonical_json_bytes(&p2).unwrap();

            prop_assert_ne!(b1, b2);
        }
    }
}
