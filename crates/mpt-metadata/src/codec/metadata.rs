//! Canonical encoding and lenient decoding of token metadata.
//!
//! Encoding emits compact keys only, sorts every object's keys, omits absent
//! optional fields, and hex-encodes in upper case. Decoding accepts either key
//! form per field; when both are present the compact form wins. Unrecognized
//! keys are ignored.

use serde_json::{Map, Value};

use crate::codec::primitives::{
    RawMetadata, canonicalize_map, decode_hex, encode_hex, parse_object,
};
use crate::error::{DecodeError, EncodeError};
use crate::model::keys::{
    ADDITIONAL_INFO, ASSET_CLASS, ASSET_SUBCLASS, DESC, FieldKey, ICON, ISSUER_NAME, NAME, TICKER,
    URI, URI_CATEGORY, URI_TITLE, URIS,
};
use crate::model::{
    AdditionalInfo, AssetClass, AssetSubclass, MPTokenMetadata, MetadataUri, UriCategory,
};

// =============================================================================
// ENCODING
// =============================================================================

/// Converts a record to its canonical compact-key JSON value.
pub fn metadata_to_json(metadata: &MPTokenMetadata) -> Value {
    let mut obj = Map::new();

    obj.insert(TICKER.compact.into(), metadata.ticker.clone().into());
    obj.insert(NAME.compact.into(), metadata.name.clone().into());
    if let Some(desc) = &metadata.desc {
        obj.insert(DESC.compact.into(), desc.clone().into());
    }
    obj.insert(ICON.compact.into(), metadata.icon.clone().into());
    obj.insert(ASSET_CLASS.compact.into(), metadata.asset_class.as_str().into());
    if let Some(subclass) = metadata.asset_subclass {
        obj.insert(ASSET_SUBCLASS.compact.into(), subclass.as_str().into());
    }
    obj.insert(ISSUER_NAME.compact.into(), metadata.issuer_name.clone().into());
    if let Some(uris) = &metadata.uris {
        let entries = uris.iter().map(uri_to_json).collect();
        obj.insert(URIS.compact.into(), Value::Array(entries));
    }
    if let Some(info) = &metadata.additional_info {
        let value = match info {
            AdditionalInfo::Text(s) => Value::String(s.clone()),
            AdditionalInfo::Map(m) => Value::Object(m.clone()),
        };
        obj.insert(ADDITIONAL_INFO.compact.into(), value);
    }

    Value::Object(canonicalize_map(obj))
}

fn uri_to_json(entry: &MetadataUri) -> Value {
    let mut obj = Map::new();
    obj.insert(URI.compact.into(), entry.uri.clone().into());
    obj.insert(URI_CATEGORY.compact.into(), entry.category.as_str().into());
    obj.insert(URI_TITLE.compact.into(), entry.title.clone().into());
    Value::Object(obj)
}

/// Encodes a record to canonical compact-key JSON text.
pub fn encode_metadata_json(metadata: &MPTokenMetadata) -> Result<String, EncodeError> {
    serde_json::to_string(&metadata_to_json(metadata)).map_err(|e| EncodeError::Serialization {
        reason: e.to_string(),
    })
}

/// Encodes a record to the upper-case hex of its canonical JSON.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(ticker = %metadata.ticker)))]
pub fn encode_metadata(metadata: &MPTokenMetadata) -> Result<String, EncodeError> {
    let json = encode_metadata_json(metadata)?;
    Ok(encode_hex(json.as_bytes()))
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a hex payload into a typed record.
///
/// Decoding is lenient about keys (either form, compact preferred, unknown
/// keys ignored) but strict about presence and types: a missing required
/// field, a value of the wrong JSON type, or a value outside a closed
/// vocabulary is an error. Run [`validate_metadata`](crate::validate_metadata)
/// for the full rule set.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(input), fields(input_len = input.len())))]
pub fn decode_metadata(input: &str) -> Result<MPTokenMetadata, DecodeError> {
    let bytes = decode_hex(input)?;
    let raw = parse_object(&bytes)?;
    metadata_from_json(&raw)
}

/// Builds a typed record from a raw JSON object.
pub fn metadata_from_json(raw: &RawMetadata) -> Result<MPTokenMetadata, DecodeError> {
    let asset_class = {
        let value = required_str(raw, &ASSET_CLASS)?;
        AssetClass::parse(value).ok_or_else(|| DecodeError::UnknownAssetClass {
            value: value.to_string(),
        })?
    };
    let asset_subclass = match optional_str(raw, &ASSET_SUBCLASS)? {
        Some(value) => Some(AssetSubclass::parse(value).ok_or_else(|| {
            DecodeError::UnknownAssetSubclass {
                value: value.to_string(),
            }
        })?),
        None => None,
    };

    Ok(MPTokenMetadata {
        ticker: required_str(raw, &TICKER)?.to_string(),
        name: required_str(raw, &NAME)?.to_string(),
        desc: optional_str(raw, &DESC)?.map(str::to_string),
        icon: required_str(raw, &ICON)?.to_string(),
        asset_class,
        asset_subclass,
        issuer_name: required_str(raw, &ISSUER_NAME)?.to_string(),
        uris: decode_uris(raw)?,
        additional_info: decode_additional_info(raw)?,
    })
}

fn decode_uris(raw: &RawMetadata) -> Result<Option<Vec<MetadataUri>>, DecodeError> {
    let Some(value) = pick(raw, &URIS) else {
        return Ok(None);
    };
    let items = value
        .as_array()
        .ok_or(DecodeError::InvalidFieldType { field: URIS.long })?;

    let mut uris = Vec::with_capacity(items.len());
    for item in items {
        let obj = item
            .as_object()
            .ok_or(DecodeError::InvalidFieldType { field: URIS.long })?;
        let category = required_str(obj, &URI_CATEGORY)?;
        uris.push(MetadataUri {
            uri: required_str(obj, &URI)?.to_string(),
            category: UriCategory::parse(category).ok_or_else(|| {
                DecodeError::UnknownUriCategory {
                    value: category.to_string(),
                }
            })?,
            title: required_str(obj, &URI_TITLE)?.to_string(),
        });
    }
    Ok(Some(uris))
}

fn decode_additional_info(raw: &RawMetadata) -> Result<Option<AdditionalInfo>, DecodeError> {
    match pick(raw, &ADDITIONAL_INFO) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(AdditionalInfo::Text(s.clone()))),
        Some(Value::Object(m)) => Ok(Some(AdditionalInfo::Map(canonicalize_map(m.clone())))),
        Some(_) => Err(DecodeError::InvalidFieldType {
            field: ADDITIONAL_INFO.long,
        }),
    }
}

/// Returns the compact form's value if present, else the long form's.
fn pick<'a>(obj: &'a Map<String, Value>, key: &FieldKey) -> Option<&'a Value> {
    obj.get(key.compact).or_else(|| obj.get(key.long))
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    key: &FieldKey,
) -> Result<Option<&'a str>, DecodeError> {
    match pick(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(DecodeError::InvalidFieldType { field: key.long }),
    }
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &FieldKey) -> Result<&'a str, DecodeError> {
    optional_str(obj, key)?.ok_or(DecodeError::MissingField { field: key.long })
}
