//! Canonical serialization + SHA-256 of a profile table.
//!
//! Produces byte-identical output across platforms, so a single hash pins
//! the behavior of every function over a range of inputs.
//!
//! Rules:
//!   - UTF-8 JSON, no whitespace, integers only
//!   - `schema_version` first, then `profiles` in caller order
//!   - profile fields in declaration order; failed entries are `null`

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::profile::NumberProfile;
use crate::PROFILE_SCHEMA_VERSION;

/// Canonical serialization of a profile table to UTF-8 JSON bytes.
pub fn canonical_serialize(profiles: &[NumberProfile]) -> Vec<u8> {
    build_canonical_value(profiles).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash(profiles: &[NumberProfile]) -> String {
    let digest = Sha256::digest(canonical_serialize(profiles));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Build the canonical value in strict field order.
///
/// `serde_json::Map` preserves insertion order (`preserve_order` feature),
/// so the layout does not depend on how serde derives `NumberProfile`.
fn build_canonical_value(profiles: &[NumberProfile]) -> Value {
    let rows: Vec<Value> = profiles.iter().map(profile_value).collect();

    let mut root = Map::new();
    root.insert(
        "schema_version".to_string(),
        Value::from(PROFILE_SCHEMA_VERSION),
    );
    root.insert("profiles".to_string(), Value::Array(rows));
    Value::Object(root)
}

fn profile_value(p: &NumberProfile) -> Value {
    let mut row = Map::new();
    row.insert("n".to_string(), Value::from(p.n));
    row.insert("is_prime".to_string(), Value::Bool(p.is_prime));
    row.insert("next_prime".to_string(), optional(p.next_prime));
    row.insert("is_perfect".to_string(), Value::Bool(p.is_perfect));
    row.insert("is_armstrong".to_string(), Value::Bool(p.is_armstrong));
    row.insert("digit_sum".to_string(), Value::from(p.digit_sum));
    row.insert("reversed".to_string(), optional(p.reversed));
    row.insert("fibonacci".to_string(), optional(p.fibonacci));
    row.insert("factorial".to_string(), optional(p.factorial));
    Value::Object(row)
}

fn optional(v: Option<i64>) -> Value {
    v.map_or(Value::Null, Value::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_serialize_layout() {
        let bytes = canonical_serialize(&[NumberProfile::of(-1)]);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\"schema_version\":1,\"profiles\":[{\"n\":-1,\"is_prime\":false,\
             \"next_prime\":2,\"is_perfect\":false,\"is_armstrong\":false,\
             \"digit_sum\":1,\"reversed\":1,\"fibonacci\":null,\"factorial\":null}]}"
        );
    }

    #[test]
    fn test_canonical_serialize_empty() {
        let bytes = canonical_serialize(&[]);
        assert_eq!(bytes, b"{\"schema_version\":1,\"profiles\":[]}".to_vec());
    }

    #[test]
    fn test_canonical_hash_shape() {
        let h = canonical_hash(&NumberProfile::range(0, 10));
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_canonical_hash_is_order_sensitive() {
        let forward = NumberProfile::range(0, 3);
        let mut backward = forward.clone();
        backward.reverse();
        assert_ne!(canonical_hash(&forward), canonical_hash(&backward));
        assert_eq!(canonical_hash(&forward), canonical_hash(&NumberProfile::range(0, 3)));
    }
}
