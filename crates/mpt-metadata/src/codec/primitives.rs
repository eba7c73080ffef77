//! Hex and JSON primitives shared by the codec and the validator.

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// A JSON object decoded before any typing; keys may mix long and compact forms.
pub type RawMetadata = Map<String, Value>;

/// Decodes a hex string (either case, no `0x` prefix) into bytes.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(input).map_err(|_| DecodeError::InvalidHex)
}

/// Encodes bytes as upper-case hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parses bytes as a JSON object.
pub fn parse_object(bytes: &[u8]) -> Result<RawMetadata, DecodeError> {
    serde_json::from_slice::<RawMetadata>(bytes).map_err(|e| DecodeError::InvalidJson {
        reason: e.to_string(),
    })
}

/// Rebuilds a JSON value with every object's keys in ascending byte order.
///
/// `serde_json` keeps maps sorted unless its `preserve_order` feature is
/// enabled somewhere in the build; rebuilding from a sorted list gives the
/// same output either way.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(canonicalize_map(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Object form of [`canonicalize`].
pub fn canonicalize_map(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
        .into_iter()
        .map(|(k, v)| (k, canonicalize(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_hex_accepts_either_case() {
        assert_eq!(decode_hex("7B7D").unwrap(), b"{}");
        assert_eq!(decode_hex("7b7d").unwrap(), b"{}");
        assert_eq!(decode_hex("").unwrap(), b"");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        assert_eq!(decode_hex("7B7"), Err(DecodeError::InvalidHex));
        assert_eq!(decode_hex("0x7B7D"), Err(DecodeError::InvalidHex));
        assert_eq!(decode_hex("GG"), Err(DecodeError::InvalidHex));
    }

    #[test]
    fn test_encode_hex_is_upper_case() {
        assert_eq!(encode_hex(b"{\"t\":\"ab\"}"), "7B2274223A226162227D");
    }

    #[test]
    fn test_parse_object() {
        let map = parse_object(br#"{"t":"A","ticker":"B"}"#).unwrap();
        assert_eq!(map.len(), 2);

        assert!(matches!(parse_object(b"[1,2]"), Err(DecodeError::InvalidJson { .. })));
        assert!(matches!(parse_object(b"\"t\""), Err(DecodeError::InvalidJson { .. })));
        assert!(matches!(parse_object(b"{"), Err(DecodeError::InvalidJson { .. })));
        assert!(matches!(parse_object(b""), Err(DecodeError::InvalidJson { .. })));
    }

    #[test]
    fn test_canonicalize_sorts_nested_objects() {
        let value = json!({"b": {"z": 1, "a": [{"y": 1, "x": 2}]}, "a": "s"});
        let text = serde_json::to_string(&canonicalize(value)).unwrap();
        assert_eq!(text, r#"{"a":"s","b":{"a":[{"x":2,"y":1}],"z":1}}"#);
    }
}
