//! Validation of hex-encoded token metadata.
//!
//! Validation works on the raw JSON object, before any typing, so that key
//! collisions and unknown keys are visible. Every check runs and every
//! violation is reported; only three structural failures stop early, since
//! without them there is no object to inspect:
//!
//! 1. the input is not hex ([`ValidationError::InvalidHex`])
//! 2. the payload exceeds [`MAX_METADATA_BYTES`] ([`ValidationError::MetadataTooLarge`])
//! 3. the payload is not a JSON object ([`ValidationError::InvalidJson`])
//!
//! Errors are ordered: field count, unknown keys (in key order), then field
//! rules in schema order.

pub mod resolve;
pub mod schema;

pub use resolve::{require_string, resolve, resolve_string};
pub use schema::{FieldDescriptor, FieldRule, fields, uri_fields, valid_key_set};

use crate::codec::{RawMetadata, decode_hex, parse_object};
use crate::error::ValidationError;
use crate::limits::{MAX_METADATA_BYTES, MAX_TOP_LEVEL_FIELDS};

/// Validates hex-encoded metadata, returning every violation found.
///
/// An empty result means the metadata is valid. Malformed input never panics.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(input), fields(input_len = input.len())))]
pub fn validate_metadata(input: &str) -> Vec<ValidationError> {
    let errors = match parse_payload(input) {
        Ok(raw) => validate_raw(&raw),
        Err(err) => vec![err],
    };

    #[cfg(feature = "tracing")]
    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "metadata rejected");
    }

    errors
}

/// Decodes the hex input into a raw object, enforcing the size ceiling on
/// the decoded bytes.
fn parse_payload(input: &str) -> Result<RawMetadata, ValidationError> {
    let bytes = decode_hex(input).map_err(|_| ValidationError::InvalidHex)?;
    if bytes.len() > MAX_METADATA_BYTES {
        return Err(ValidationError::MetadataTooLarge {
            len: bytes.len(),
            max: MAX_METADATA_BYTES,
        });
    }
    parse_object(&bytes).map_err(|_| ValidationError::InvalidJson)
}

/// Validates an already-decoded raw object.
pub fn validate_raw(raw: &RawMetadata) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if raw.len() > MAX_TOP_LEVEL_FIELDS {
        errors.push(ValidationError::FieldCountExceeded {
            max: MAX_TOP_LEVEL_FIELDS,
        });
    }

    let known = valid_key_set();
    for key in raw.keys() {
        if !known.contains(key.as_str()) {
            errors.push(ValidationError::UnknownField { key: key.clone() });
        }
    }

    for field in fields() {
        if let Err(err) = field.check(raw) {
            errors.push(err);
        }
    }

    errors
}
