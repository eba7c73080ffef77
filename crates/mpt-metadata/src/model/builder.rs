//! Builder API for ergonomic metadata construction.
//!
//! # Example
//!
//! ```rust
//! use mpt_metadata::model::{AssetClass, AssetSubclass, MetadataBuilder, UriCategory};
//!
//! let metadata = MetadataBuilder::new("TBILL", "T-Bill Yield Token", "https://example.com/icon.png", AssetClass::Rwa, "Example Yield Co.")
//!     .desc("Short-term US Treasury exposure")
//!     .asset_subclass(AssetSubclass::Treasury)
//!     .uri("https://example.com", UriCategory::Website, "Home")
//!     .build();
//!
//! assert_eq!(metadata.uris.as_ref().map(Vec::len), Some(1));
//! ```

use crate::model::{
    AdditionalInfo, AssetClass, AssetSubclass, MPTokenMetadata, MetadataUri, UriCategory,
};

/// Builder for constructing an [`MPTokenMetadata`].
///
/// The builder does not validate; run the encoded result through
/// [`validate_metadata`](crate::validate_metadata) before storing it.
#[derive(Debug, Clone)]
pub struct MetadataBuilder {
    metadata: MPTokenMetadata,
}

impl MetadataBuilder {
    /// Creates a builder with all required fields set.
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        asset_class: AssetClass,
        issuer_name: impl Into<String>,
    ) -> Self {
        Self {
            metadata: MPTokenMetadata {
                ticker: ticker.into(),
                name: name.into(),
                desc: None,
                icon: icon.into(),
                asset_class,
                asset_subclass: None,
                issuer_name: issuer_name.into(),
                uris: None,
                additional_info: None,
            },
        }
    }

    /// Sets the description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.metadata.desc = Some(desc.into());
        self
    }

    /// Sets the asset subclass.
    pub fn asset_subclass(mut self, subclass: AssetSubclass) -> Self {
        self.metadata.asset_subclass = Some(subclass);
        self
    }

    /// Appends a link to `uris`.
    pub fn uri(
        mut self,
        uri: impl Into<String>,
        category: UriCategory,
        title: impl Into<String>,
    ) -> Self {
        self.metadata
            .uris
            .get_or_insert_with(Vec::new)
            .push(MetadataUri::new(uri, category, title));
        self
    }

    /// Appends several links to `uris`.
    pub fn uris(mut self, uris: impl IntoIterator<Item = MetadataUri>) -> Self {
        self.metadata
            .uris
            .get_or_insert_with(Vec::new)
            .extend(uris);
        self
    }

    /// Sets `additional_info`.
    pub fn additional_info(mut self, info: impl Into<AdditionalInfo>) -> Self {
        self.metadata.additional_info = Some(info.into());
        self
    }

    /// Builds the record.
    pub fn build(self) -> MPTokenMetadata {
        self.metadata
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value};

    use super::*;

    #[test]
    fn test_builder_required_only() {
        let md = MetadataBuilder::new("AB", "N", "I", AssetClass::Other, "Org").build();

        assert_eq!(md.ticker, "AB");
        assert_eq!(md.asset_class, AssetClass::Other);
        assert!(md.desc.is_none());
        assert!(md.asset_subclass.is_none());
        assert!(md.uris.is_none());
        assert!(md.additional_info.is_none());
    }

    #[test]
    fn test_builder_preserves_uri_order() {
        let md = MetadataBuilder::new("AB", "N", "I", AssetClass::Defi, "Org")
            .uri("https://b.example", UriCategory::Docs, "B")
            .uri("https://a.example", UriCategory::Website, "A")
            .uris([MetadataUri::new("https://c.example", UriCategory::Social, "C")])
            .build();

        let titles: Vec<_> = md
            .uris
            .unwrap()
            .into_iter()
            .map(|u| u.title)
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_builder_additional_info() {
        let md = MetadataBuilder::new("AB", "N", "I", AssetClass::Defi, "Org")
            .additional_info("extra")
            .build();
        assert_eq!(md.additional_info, Some(AdditionalInfo::Text("extra".into())));

        let mut map = Map::new();
        map.insert("cusip".into(), Value::String("912796RX0".into()));
        let md = MetadataBuilder::new("AB", "N", "I", AssetClass::Defi, "Org")
            .additional_info(map.clone())
            .build();
        assert_eq!(md.additional_info, Some(AdditionalInfo::Map(map)));
    }
}
