//! Field schema: every recognized key pair with the rule that checks it.
//!
//! The tables are immutable and shared by all callers.

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::limits::{MAX_TICKER_LEN, URI_FIELD_COUNT};
use crate::model::keys::{
    ADDITIONAL_INFO, ASSET_CLASS, ASSET_SUBCLASS, DESC, ICON, ISSUER_NAME, NAME, TICKER, URI,
    URI_CATEGORY, URI_TITLE, URIS,
};
use crate::model::{AssetClass, AssetSubclass, FieldKey, UriCategory};
use crate::util::{is_map, is_string, is_upper_alphanumeric};
use crate::validate::resolve::{require_string, resolve, resolve_string};

/// Checks one field of a JSON object.
pub type FieldRule = fn(&Map<String, Value>) -> Result<(), ValidationError>;

/// A recognized field: its key pair and the rule applied to it.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub rule: FieldRule,
}

impl FieldDescriptor {
    /// Runs this field's rule against `map`.
    pub fn check(&self, map: &Map<String, Value>) -> Result<(), ValidationError> {
        (self.rule)(map)
    }
}

static FIELDS: [FieldDescriptor; 9] = [
    FieldDescriptor { key: TICKER, rule: check_ticker },
    FieldDescriptor { key: NAME, rule: check_name },
    FieldDescriptor { key: DESC, rule: check_desc },
    FieldDescriptor { key: ICON, rule: check_icon },
    FieldDescriptor { key: ASSET_CLASS, rule: check_asset_class },
    FieldDescriptor { key: ASSET_SUBCLASS, rule: check_asset_subclass },
    FieldDescriptor { key: ISSUER_NAME, rule: check_issuer_name },
    FieldDescriptor { key: URIS, rule: check_uris },
    FieldDescriptor { key: ADDITIONAL_INFO, rule: check_additional_info },
];

static URI_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor { key: URI, rule: check_uri },
    FieldDescriptor { key: URI_CATEGORY, rule: check_uri_category },
    FieldDescriptor { key: URI_TITLE, rule: check_uri_title },
];

lazy_static! {
    static ref VALID_KEYS: FxHashSet<&'static str> = FIELDS
        .iter()
        .flat_map(|f| [f.key.long, f.key.compact])
        .collect();
}

/// Top-level fields, in the order their rules run.
pub fn fields() -> &'static [FieldDescriptor] {
    &FIELDS
}

/// Fields of a `uris` entry.
pub fn uri_fields() -> &'static [FieldDescriptor] {
    &URI_FIELDS
}

/// Every long and compact top-level key.
pub fn valid_key_set() -> &'static FxHashSet<&'static str> {
    &VALID_KEYS
}

// =============================================================================
// TOP-LEVEL RULES
// =============================================================================

fn check_ticker(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let ticker = require_string(map, &TICKER)?;
    if !is_upper_alphanumeric(ticker, MAX_TICKER_LEN) {
        return Err(ValidationError::InvalidTicker);
    }
    Ok(())
}

fn check_name(map: &Map<String, Value>) -> Result<(), ValidationError> {
    require_string(map, &NAME).map(drop)
}

fn check_desc(map: &Map<String, Value>) -> Result<(), ValidationError> {
    resolve_string(map, &DESC).map(drop)
}

fn check_icon(map: &Map<String, Value>) -> Result<(), ValidationError> {
    require_string(map, &ICON).map(drop)
}

fn check_issuer_name(map: &Map<String, Value>) -> Result<(), ValidationError> {
    require_string(map, &ISSUER_NAME).map(drop)
}

fn check_asset_class(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let class = require_string(map, &ASSET_CLASS)?;
    match AssetClass::parse(class) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidAssetClass {
            allowed: AssetClass::NAMES,
        }),
    }
}

fn check_asset_subclass(map: &Map<String, Value>) -> Result<(), ValidationError> {
    // Problems with asset_class itself are reported by its own rule.
    let is_rwa = matches!(
        resolve_string(map, &ASSET_CLASS),
        Ok(Some(class)) if class == AssetClass::Rwa.as_str()
    );

    match resolve_string(map, &ASSET_SUBCLASS)? {
        None if is_rwa => Err(ValidationError::RwaSubclassRequired),
        None => Ok(()),
        Some(subclass) => match AssetSubclass::parse(subclass) {
            Some(_) => Ok(()),
            None => Err(ValidationError::InvalidAssetSubclass {
                allowed: AssetSubclass::NAMES,
            }),
        },
    }
}

fn check_uris(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let Some(value) = resolve(map, &URIS)? else {
        return Ok(());
    };
    let entries = match value.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(ValidationError::InvalidUris),
    };

    // Any problem inside the list is reported once, without detail.
    for entry in entries {
        check_uri_entry(entry).map_err(|_| ValidationError::InvalidUris)?;
    }
    Ok(())
}

fn check_uri_entry(entry: &Value) -> Result<(), ValidationError> {
    let obj = entry.as_object().ok_or(ValidationError::InvalidUris)?;
    if obj.len() != URI_FIELD_COUNT {
        return Err(ValidationError::InvalidUris);
    }
    for field in uri_fields() {
        field.check(obj)?;
    }
    Ok(())
}

fn check_additional_info(map: &Map<String, Value>) -> Result<(), ValidationError> {
    match resolve(map, &ADDITIONAL_INFO)? {
        None => Ok(()),
        Some(value) if is_string(value) || is_map(value) => Ok(()),
        Some(_) => Err(ValidationError::InvalidAdditionalInfo),
    }
}

// =============================================================================
// URI ENTRY RULES
// =============================================================================

fn check_uri(obj: &Map<String, Value>) -> Result<(), ValidationError> {
    require_string(obj, &URI).map(drop)
}

fn check_uri_category(obj: &Map<String, Value>) -> Result<(), ValidationError> {
    let category = require_string(obj, &URI_CATEGORY)?;
    match UriCategory::parse(category) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidUris),
    }
}

fn check_uri_title(obj: &Map<String, Value>) -> Result<(), ValidationError> {
    require_string(obj, &URI_TITLE).map(drop)
}
