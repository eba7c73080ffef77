//! Key resolution over raw metadata maps.
//!
//! A field may be written under its long or its compact key, never both.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::FieldKey;

/// Looks up a field under either key form.
///
/// Returns `Ok(None)` when neither form is present; whether that is an error
/// is up to the caller. Fails with [`ValidationError::FieldCollision`] when
/// both forms are present.
pub fn resolve<'a>(
    map: &'a Map<String, Value>,
    key: &FieldKey,
) -> Result<Option<&'a Value>, ValidationError> {
    match (map.get(key.long), map.get(key.compact)) {
        (Some(_), Some(_)) => Err(ValidationError::FieldCollision {
            long: key.long,
            compact: key.compact,
        }),
        (Some(value), None) | (None, Some(value)) => Ok(Some(value)),
        (None, None) => Ok(None),
    }
}

/// Like [`resolve`], but the value must be a non-empty string.
///
/// Strings are not trimmed; `" "` is accepted.
pub fn resolve_string<'a>(
    map: &'a Map<String, Value>,
    key: &FieldKey,
) -> Result<Option<&'a str>, ValidationError> {
    match resolve(map, key)? {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::EmptyString { key: key.long }),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ValidationError::InvalidStringType { key: key.long }),
    }
}

/// Like [`resolve_string`], but absence is a [`ValidationError::MissingField`].
pub fn require_string<'a>(
    map: &'a Map<String, Value>,
    key: &FieldKey,
) -> Result<&'a str, ValidationError> {
    resolve_string(map, key)?.ok_or(ValidationError::MissingField { field: key.long })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::keys::{TICKER, URI_TITLE};

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_resolve_either_form() {
        let long = map(json!({"ticker": "AB"}));
        let compact = map(json!({"t": "AB"}));

        assert_eq!(resolve(&long, &TICKER).unwrap(), Some(&json!("AB")));
        assert_eq!(resolve(&compact, &TICKER).unwrap(), Some(&json!("AB")));
        assert_eq!(resolve(&map(json!({})), &TICKER).unwrap(), None);
    }

    #[test]
    fn test_resolve_collision() {
        let both = map(json!({"ticker": "AB", "t": "AB"}));
        assert_eq!(
            resolve(&both, &TICKER),
            Err(ValidationError::FieldCollision {
                long: "ticker",
                compact: "t"
            })
        );
    }

    #[test]
    fn test_resolve_string_rules() {
        assert_eq!(
            resolve_string(&map(json!({"t": 1})), &TICKER),
            Err(ValidationError::InvalidStringType { key: "ticker" })
        );
        assert_eq!(
            resolve_string(&map(json!({"t": ""})), &TICKER),
            Err(ValidationError::EmptyString { key: "ticker" })
        );
        assert_eq!(resolve_string(&map(json!({"t": " "})), &TICKER), Ok(Some(" ")));
    }

    #[test]
    fn test_errors_use_long_key() {
        // "t" is the compact form of both `ticker` and a URI's `title`.
        assert_eq!(
            resolve_string(&map(json!({"t": null})), &URI_TITLE),
            Err(ValidationError::InvalidStringType { key: "title" })
        );
        assert_eq!(
            require_string(&map(json!({})), &URI_TITLE),
            Err(ValidationError::MissingField { field: "title" })
        );
    }
}
