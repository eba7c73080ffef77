//! Primitive predicates over raw JSON values and strings.

use serde_json::Value;

/// Returns true if the value is a JSON string.
#[inline]
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Returns true if the value is a JSON object.
#[inline]
pub fn is_map(value: &Value) -> bool {
    value.is_object()
}

/// Returns true if `s` has between 1 and `max_len` characters, all of them
/// ASCII uppercase letters or digits.
pub fn is_upper_alphanumeric(s: &str, max_len: usize) -> bool {
    !s.is_empty()
        && s.len() <= max_len
        && s.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_value_predicates() {
        assert!(is_string(&json!("x")));
        assert!(!is_string(&json!(1)));
        assert!(is_map(&json!({"a": 1})));
        assert!(!is_map(&json!([1, 2])));
        assert!(!is_map(&json!(null)));
    }

    #[test]
    fn test_upper_alphanumeric() {
        assert!(is_upper_alphanumeric("TBILL", 6));
        assert!(is_upper_alphanumeric("A1B2C3", 6));
        assert!(!is_upper_alphanumeric("", 6));
        assert!(!is_upper_alphanumeric("TOOLONG", 6));
        assert!(!is_upper_alphanumeric("tbill", 6));
        assert!(!is_upper_alphanumeric("T-BILL", 6));
        // Non-ASCII uppercase is rejected.
        assert!(!is_upper_alphanumeric("ÄB", 6));
    }
}
