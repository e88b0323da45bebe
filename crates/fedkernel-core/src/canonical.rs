//! Canonical JSON encoding for deterministic content hashing.
//!
//! Redacted events are re-hashed, so every server must produce the same
//! bytes for the same content:
//! - Object keys sorted by their UTF-8 bytes
//! - No insignificant whitespace
//! - Integers only (floats are rejected)
//! - Strings as UTF-8 with minimal JSON escaping
//!
//! Key order does not depend on how the `serde_json::Map` was built.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::CoreError;

/// Encode a JSON value to canonical bytes.
pub fn canonical_json(value: &Value) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value, "$")?;
    Ok(buf)
}

/// Encode a content object to canonical bytes.
pub fn canonical_content(content: &Map<String, Value>) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    encode_object(&mut buf, content, "$")?;
    Ok(buf)
}

/// Recursively encode a value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value, path: &str) -> Result<(), CoreError> {
    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                buf.extend_from_slice(i.to_string().as_bytes());
            } else if let Some(u) = n.as_u64() {
                buf.extend_from_slice(u.to_string().as_bytes());
            } else {
                return Err(CoreError::NonCanonicalValue {
                    path: path.to_string(),
                    reason: "floats are not permitted",
                });
            }
        }
        Value::String(s) => encode_string(buf, s)?,
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                encode_value_to(buf, item, &format!("{}[{}]", path, i))?;
            }
            buf.push(b']');
        }
        Value::Object(map) => encode_object(buf, map, path)?,
    }
    Ok(())
}

/// Encode an object with keys in byte order.
fn encode_object(buf: &mut Vec<u8>, map: &Map<String, Value>, path: &str) -> Result<(), CoreError> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    buf.push(b'{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            buf.push(b',');
        }
        encode_string(buf, key)?;
        buf.push(b':');
        encode_value_to(buf, value, &format!("{}.{}", path, key))?;
    }
    buf.push(b'}');
    Ok(())
}

/// Encode a string with serde_json's escaping (control characters, `"`, `\`).
fn encode_string(buf: &mut Vec<u8>, s: &str) -> Result<(), CoreError> {
    serde_json::to_writer(&mut *buf, s)?;
    Ok(())
}

/// Blake3 hash of canonical content bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Hash raw bytes.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Hash the canonical encoding of a content object.
    pub fn of_content(content: &Map<String, Value>) -> Result<Self, CoreError> {
        Ok(Self::hash(&canonical_content(content)?))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: Value) -> String {
        String::from_utf8(canonical_json(&value).unwrap()).unwrap()
    }

    #[test]
    fn test_keys_sorted_and_compact() {
        assert_eq!(
            encode(json!({"b": 1, "a": [true, null], "c": {"z": "x", "y": -2}})),
            r#"{"a":[true,null],"b":1,"c":{"y":-2,"z":"x"}}"#
        );
    }

    #[test]
    fn test_key_order_is_bytewise() {
        // '@' (0x40) sorts before lowercase letters, uppercase before lowercase.
        assert_eq!(
            encode(json!({"default": 0, "@alice:example.com": 100, "Zed": 1})),
            r#"{"@alice:example.com":100,"Zed":1,"default":0}"#
        );
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(encode(json!("a\"b\\c\n")), r#""a\"b\\c\n""#);
        assert_eq!(encode(json!("caf\u{e9}")), "\"caf\u{e9}\"");
    }

    #[test]
    fn test_large_integers() {
        assert_eq!(encode(json!(u64::MAX)), u64::MAX.to_string());
        assert_eq!(encode(json!(i64::MIN)), i64::MIN.to_string());
    }

    #[test]
    fn test_float_rejected_with_path() {
        let err = canonical_json(&json!({"a": [1, {"b": 1.5}]})).unwrap_err();
        match err {
            CoreError::NonCanonicalValue { path, .. } => assert_eq!(path, "$.a[1].b"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_content_hash_deterministic() {
        let a = json!({"membership": "join", "x": 1});
        let b = json!({"x": 1, "membership": "join"});
        let ha = ContentHash::of_content(a.as_object().unwrap()).unwrap();
        let hb = ContentHash::of_content(b.as_object().unwrap()).unwrap();
        assert_eq!(ha, hb);

        let recovered = ContentHash::from_hex(&ha.to_hex()).unwrap();
        assert_eq!(ha, recovered);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(canonical_content(&Map::new()).unwrap(), b"{}");
    }
}
