//! Long and compact key names for metadata fields.
//!
//! Every field has a descriptive long name and a short alias used to save
//! on-ledger bytes. Encoding always emits the compact form.

/// A metadata field's long/compact key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub long: &'static str,
    pub compact: &'static str,
}

impl FieldKey {
    /// Creates a key pair.
    pub const fn new(long: &'static str, compact: &'static str) -> Self {
        Self { long, compact }
    }
}

// Top-level fields
pub const TICKER: FieldKey = FieldKey::new("ticker", "t");
pub const NAME: FieldKey = FieldKey::new("name", "n");
pub const DESC: FieldKey = FieldKey::new("desc", "d");
pub const ICON: FieldKey = FieldKey::new("icon", "i");
pub const ASSET_CLASS: FieldKey = FieldKey::new("asset_class", "ac");
pub const ASSET_SUBCLASS: FieldKey = FieldKey::new("asset_subclass", "as");
pub const ISSUER_NAME: FieldKey = FieldKey::new("issuer_name", "in");
pub const URIS: FieldKey = FieldKey::new("uris", "us");
pub const ADDITIONAL_INFO: FieldKey = FieldKey::new("additional_info", "ai");

// Fields of a `uris` entry
pub const URI: FieldKey = FieldKey::new("uri", "u");
pub const URI_CATEGORY: FieldKey = FieldKey::new("category", "c");
pub const URI_TITLE: FieldKey = FieldKey::new("title", "t");
