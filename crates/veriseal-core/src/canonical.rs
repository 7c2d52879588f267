//! Canonical JSON encoding for deterministic serialization.
//!
//! This module implements the wire canonical form:
//! - Object keys sorted lexicographically by Unicode code point
//! - Compact separators, no insignificant whitespace
//! - ASCII-only output: non-ASCII characters escaped as `\uXXXX`
//!   (surrogate pairs above the BMP)
//! - Integers in plain decimal, fractional numbers in shortest
//!   round-trip form; non-finite numbers rejected
//!
//! The canonical encoding is critical: it ensures that the same payload
//! produces identical bytes (and thus identical digests and signatures)
//! across all platforms and implementations.

use serde_json::{Map, Value};
use std::io::Write;

use crate::error::CoreError;
use crate::receipt::ReceiptHeader;

/// Maximum nesting depth accepted by the encoder.
///
/// `serde_json::Value` cannot express cycles, so a depth bound is the
/// only recursion guard needed.
pub const MAX_DEPTH: usize = 128;

/// Encode a value to canonical JSON bytes.
///
/// Pure function: equal values encode to identical bytes regardless of
/// construction or iteration order.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    encode_value(&mut buf, value, 0)?;
    Ok(buf)
}

/// Construct the signed message for a receipt header.
///
/// This is the canonical encoding of the four signed fields as a JSON
/// object; the signature field is excluded from its own input. Signing
/// and verification must both go through this function.
pub fn signed_message(header: &ReceiptHeader) -> Result<Vec<u8>, CoreError> {
    let mut fields = Map::new();
    fields.insert("state_hash".into(), Value::String(header.state_hash.clone()));
    fields.insert("ui_hash".into(), Value::String(header.ui_hash.clone()));
    fields.insert("timestamp".into(), Value::String(header.timestamp.clone()));
    fields.insert("nonce".into(), Value::String(header.nonce.clone()));
    canonical_json_bytes(&Value::Object(fields))
}

/// Recursively encode a JSON value.
fn encode_value(buf: &mut Vec<u8>, value: &Value, depth: usize) -> Result<(), CoreError> {
    if depth > MAX_DEPTH {
        return Err(CoreError::DepthExceeded(MAX_DEPTH));
    }

    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        Value::Number(n) => encode_number(buf, n)?,
        Value::String(s) => encode_string(buf, s),
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                encode_value(buf, item, depth + 1)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            encode_object_canonical(buf, map, depth)?;
        }
    }
    Ok(())
}

/// Encode a number.
///
/// Integers render in plain decimal. Fractional numbers use serde_json's
/// shortest round-trip formatting, which is the normative form here.
fn encode_number(buf: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CoreError> {
    if n.is_f64() && !n.as_f64().is_some_and(f64::is_finite) {
        return Err(CoreError::NonFiniteNumber);
    }
    buf.extend_from_slice(n.to_string().as_bytes());
    Ok(())
}

/// Encode a string with ASCII-only escaping.
fn encode_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for c in s.chars() {
        match c {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\u{08}' => buf.extend_from_slice(b"\\b"),
            '\t' => buf.extend_from_slice(b"\\t"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\u{0c}' => buf.extend_from_slice(b"\\f"),
            '\r' => buf.extend_from_slice(b"\\r"),
            c if (c as u32) < 0x20 => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c if c.is_ascii() => buf.push(c as u8),
            c => {
                // Non-ASCII escapes as UTF-16 code units (surrogate
                // pairs above the BMP).
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(buf, "\\u{:04x}", unit);
                }
            }
        }
    }
    buf.push(b'"');
}

/// Encode an object with keys in sorted order.
///
/// UTF-8 byte order coincides with Unicode code point order, so a plain
/// byte sort of the key strings gives the canonical ordering.
fn encode_object_canonical(
    buf: &mut Vec<u8>,
    map: &Map<String, Value>,
    depth: usize,
) -> Result<(), CoreError> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    buf.push(b'{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            buf.push(b',');
        }
        encode_string(buf, key);
        buf.push(b':');
        encode_value(buf, value, depth + 1)?;
    }
    buf.push(b'}');
    Ok(())
}
