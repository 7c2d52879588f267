//! Golden canonical-encoding vectors.
//!
//! The canonical form is a cross-language contract: a different
//! implementation must reproduce these bytes (and digests) exactly for
//! signatures to verify across implementations. Inputs are given as JSON
//! text in arbitrary key order; expected outputs are the canonical text
//! and its SHA-256 digest.

use serde_json::Value;
use veriseal_core::{canonical_json_bytes, CoreError, Sha256Digest};

/// A golden canonical-encoding vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input payload as JSON text, keys deliberately unordered.
    pub payload_json: &'static str,
    /// Expected canonical encoding.
    pub canonical: &'static str,
    /// Expected SHA-256 of the canonical bytes (lowercase hex).
    pub sha256_hex: &'static str,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "scenario payload",
            payload_json: r#"[{"id":"test"}]"#,
            canonical: r#"[{"id":"test"}]"#,
            sha256_hex: "405e7271bcac3a6765dbf81e8696c949ddfcc9d30843173aba1f9b55ad7b40a6",
        },
        GoldenVector {
            name: "nested maps, unordered keys, unicode",
            payload_json: r#"{"b":[1,2,3],"a":{"z":null,"y":true,"x":"café"},"n":-7,"f":2.5,"s":""}"#,
            canonical: r#"{"a":{"x":"caf\u00e9","y":true,"z":null},"b":[1,2,3],"f":2.5,"n":-7,"s":""}"#,
            sha256_hex: "28da54962fe421cd5e02617baaedcfdb1bda2c3f975026b4f973facbfe07d1a8",
        },
        GoldenVector {
            name: "empty array",
            payload_json: "[]",
            canonical: "[]",
            sha256_hex: "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945",
        },
        GoldenVector {
            name: "empty object",
            payload_json: "{}",
            canonical: "{}",
            sha256_hex: "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a",
        },
        GoldenVector {
            name: "mixed scalars",
            payload_json: r#"[null,false,"x"]"#,
            canonical: r#"[null,false,"x"]"#,
            sha256_hex: "0bee1cf3f2f7433b060e7d9df6b3da77f5bcf405f5e515d172a2f4c327c12c0d",
        },
        GoldenVector {
            name: "short escapes",
            payload_json: r#"{"k":"\n\t\"\\"}"#,
            canonical: r#"{"k":"\n\t\"\\"}"#,
            sha256_hex: "87edffdd0010e444144f1bd8422d7a02bce37cb492b84f8173b96ffaa2c8a1ae",
        },
        GoldenVector {
            name: "bare zero",
            payload_json: "0",
            canonical: "0",
            sha256_hex: "5feceb66ffc86f38d952786c6d696c79c2dbc239dd4e91b46729d73a27fb57e9",
        },
        GoldenVector {
            name: "bare string",
            payload_json: r#""plain""#,
            canonical: r#""plain""#,
            sha256_hex: "945603a8f587786b463c3f94fce115c0fae88fac2728cc96ddf5981cf7f61741",
        },
        GoldenVector {
            name: "astral character as surrogate pair",
            payload_json: r#"{"note":"💡idea"}"#,
            canonical: r#"{"note":"\ud83d\udca1idea"}"#,
            sha256_hex: "56e4593f06e91f95c3a5e9c317b454bf0d0562cec8cbb5d415c4a93bd6e78dcb",
        },
        GoldenVector {
            name: "number forms",
            payload_json: r#"{"f":0.1,"neg":-2.5e-3,"big":12345678901234567}"#,
            canonical: r#"{"big":12345678901234567,"f":0.1,"neg":-0.0025}"#,
            sha256_hex: "abfeef8b279854863cbceb5f65aadd564e1bd0c08e7b2eef4f4743422ef08bce",
        },
        GoldenVector {
            name: "float edge forms",
            payload_json: "[1.0,-0.0]",
            canonical: "[1.0,-0.0]",
            sha256_hex: "88014058156616ffb8921bb97a9291b9ec3350eed0decbe4068769a828e0e93e",
        },
    ]
}

/// Encode a vector's payload and return (canonical text, digest hex).
pub fn encode_vector(vector: &GoldenVector) -> Result<(String, String), CoreError> {
    let payload: Value =
        serde_json::from_str(vector.payload_json).expect("vector payloads are valid JSON");
    let bytes = canonical_json_bytes(&payload)?;
    let digest = Sha256Digest::hash(&bytes).to_hex();
    let text = String::from_utf8(bytes).expect("canonical output is ASCII");
    Ok((text, digest))
}

/// Check every golden vector, returning the names of any mismatches.
pub fn verify_all_vectors() -> Vec<&'static str> {
    let mut failures = Vec::new();
    for vector in all_vectors() {
        match encode_vector(&vector) {
            Ok((canonical, digest)) => {
                if canonical != vector.canonical || digest != vector.sha256_hex {
                    failures.push(vector.name);
                }
            }
            Err(_) => failures.push(vector.name),
        }
    }
    failures
}
