//! Typed token metadata record.

use serde_json::{Map, Value};

use crate::codec;
use crate::error::{DecodeError, EncodeError};
use crate::model::{AssetClass, AssetSubclass, UriCategory};

/// Token metadata as stored in an issuance's `MPTokenMetadata` field.
///
/// A record built from valid parts and encoded with [`codec::encode_metadata`]
/// decodes back to an equal record, and re-encodes to the same hex.
#[derive(Debug, Clone, PartialEq)]
pub struct MPTokenMetadata {
    /// Uppercase letters and digits, at most 6 characters.
    pub ticker: String,
    pub name: String,
    pub desc: Option<String>,
    /// URI of the token icon.
    pub icon: String,
    pub asset_class: AssetClass,
    /// Required when `asset_class` is [`AssetClass::Rwa`].
    pub asset_subclass: Option<AssetSubclass>,
    pub issuer_name: String,
    /// Related links, in the order given.
    pub uris: Option<Vec<MetadataUri>>,
    pub additional_info: Option<AdditionalInfo>,
}

impl MPTokenMetadata {
    /// Encodes to the canonical upper-case hex form.
    pub fn to_hex(&self) -> Result<String, EncodeError> {
        codec::encode_metadata(self)
    }

    /// Decodes from hex, accepting long or compact keys.
    pub fn from_hex(input: &str) -> Result<Self, DecodeError> {
        codec::decode_metadata(input)
    }

    /// Returns the canonical compact-key JSON value.
    pub fn to_json(&self) -> Value {
        codec::metadata_to_json(self)
    }
}

/// An entry of the `uris` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataUri {
    pub uri: String,
    pub category: UriCategory,
    pub title: String,
}

impl MetadataUri {
    pub fn new(uri: impl Into<String>, category: UriCategory, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            category,
            title: title.into(),
        }
    }
}

/// Free-form `additional_info`: either a string or a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalInfo {
    Text(String),
    Map(Map<String, Value>),
}

impl From<&str> for AdditionalInfo {
    fn from(s: &str) -> Self {
        AdditionalInfo::Text(s.to_string())
    }
}

impl From<String> for AdditionalInfo {
    fn from(s: String) -> Self {
        AdditionalInfo::Text(s)
    }
}

impl From<Map<String, Value>> for AdditionalInfo {
    fn from(m: Map<String, Value>) -> Self {
        AdditionalInfo::Map(m)
    }
}
