//! Error types for metadata encoding, decoding and validation.

use thiserror::Error;

/// Coarse grouping of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The payload could not be turned into a JSON object, or is too big.
    Structural,
    /// A key is unknown, or both its long and compact forms are present.
    KeyForm,
    /// A field is missing or its value breaks the field's rule.
    FieldContent,
}

impl ErrorKind {
    /// Returns a stable short code for this kind (e.g., "structural").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Structural => "structural",
            ErrorKind::KeyForm => "key_form",
            ErrorKind::FieldContent => "field_content",
        }
    }
}

/// A single violation reported by [`validate_metadata`](crate::validate_metadata).
///
/// Validation collects every violation it finds, so callers receive a
/// `Vec<ValidationError>`; any non-empty list means the metadata must be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // === Structural ===
    #[error("metadata is not a valid hex string")]
    InvalidHex,

    #[error("metadata is not a valid JSON object")]
    InvalidJson,

    #[error("metadata is {len} bytes, exceeding the maximum of {max}")]
    MetadataTooLarge { len: usize, max: usize },

    #[error("metadata has more than {max} fields")]
    FieldCountExceeded { max: usize },

    // === Key form ===
    #[error("{long}/{compact}: both long and compact forms present, use only one")]
    FieldCollision {
        long: &'static str,
        compact: &'static str,
    },

    #[error("unknown field: {key}")]
    UnknownField { key: String },

    // === Field content ===
    #[error("{key}: should be a string")]
    InvalidStringType { key: &'static str },

    #[error("{key}: should not be an empty string")]
    EmptyString { key: &'static str },

    #[error("ticker: should have uppercase letters (A-Z) and digits (0-9) only, max 6 characters")]
    InvalidTicker,

    #[error("asset_class: should be one of {}", .allowed.join(", "))]
    InvalidAssetClass { allowed: &'static [&'static str] },

    #[error("asset_subclass: should be one of {}", .allowed.join(", "))]
    InvalidAssetSubclass { allowed: &'static [&'static str] },

    #[error("asset_subclass: required when asset_class is rwa")]
    RwaSubclassRequired,

    #[error("uris: should be a non-empty list of objects with exactly uri, category and title")]
    InvalidUris,

    #[error("additional_info: should be a string or a JSON object")]
    InvalidAdditionalInfo,

    #[error("{field}: required field is missing")]
    MissingField { field: &'static str },
}

impl ValidationError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidHex
            | ValidationError::InvalidJson
            | ValidationError::MetadataTooLarge { .. }
            | ValidationError::FieldCountExceeded { .. } => ErrorKind::Structural,
            ValidationError::FieldCollision { .. } | ValidationError::UnknownField { .. } => {
                ErrorKind::KeyForm
            }
            _ => ErrorKind::FieldContent,
        }
    }
}

/// Error while decoding a hex payload into a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("metadata is not a valid hex string")]
    InvalidHex,

    #[error("metadata is not a valid JSON object: {reason}")]
    InvalidJson { reason: String },

    #[error("{field}: required field is missing")]
    MissingField { field: &'static str },

    #[error("{field}: unexpected JSON type")]
    InvalidFieldType { field: &'static str },

    #[error("unknown asset class: {value}")]
    UnknownAssetClass { value: String },

    #[error("unknown asset subclass: {value}")]
    UnknownAssetSubclass { value: String },

    #[error("unknown uri category: {value}")]
    UnknownUriCategory { value: String },
}

/// Error while encoding a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("failed to serialize metadata: {reason}")]
    Serialization { reason: String },
}
