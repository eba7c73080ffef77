//! Closed vocabularies used by metadata fields.

/// Asset class of the token (`asset_class`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetClass {
    /// Real-world asset. Requires an [`AssetSubclass`].
    Rwa,
    Memes,
    Wrapped,
    Gaming,
    Defi,
    Other,
}

impl AssetClass {
    /// All asset classes, in declaration order.
    pub const ALL: [AssetClass; 6] = [
        AssetClass::Rwa,
        AssetClass::Memes,
        AssetClass::Wrapped,
        AssetClass::Gaming,
        AssetClass::Defi,
        AssetClass::Other,
    ];

    /// Wire names of all asset classes.
    pub const NAMES: &'static [&'static str] =
        &["rwa", "memes", "wrapped", "gaming", "defi", "other"];

    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetClass::Rwa => "rwa",
            AssetClass::Memes => "memes",
            AssetClass::Wrapped => "wrapped",
            AssetClass::Gaming => "gaming",
            AssetClass::Defi => "defi",
            AssetClass::Other => "other",
        }
    }

    /// Parses a wire name. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<AssetClass> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Subclass of a real-world asset (`asset_subclass`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSubclass {
    Stablecoin,
    Commodity,
    RealEstate,
    PrivateCredit,
    Equity,
    Treasury,
    Other,
}

impl AssetSubclass {
    /// All asset subclasses, in declaration order.
    pub const ALL: [AssetSubclass; 7] = [
        AssetSubclass::Stablecoin,
        AssetSubclass::Commodity,
        AssetSubclass::RealEstate,
        AssetSubclass::PrivateCredit,
        AssetSubclass::Equity,
        AssetSubclass::Treasury,
        AssetSubclass::Other,
    ];

    /// Wire names of all asset subclasses.
    pub const NAMES: &'static [&'static str] = &[
        "stablecoin",
        "commodity",
        "real_estate",
        "private_credit",
        "equity",
        "treasury",
        "other",
    ];

    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetSubclass::Stablecoin => "stablecoin",
            AssetSubclass::Commodity => "commodity",
            AssetSubclass::RealEstate => "real_estate",
            AssetSubclass::PrivateCredit => "private_credit",
            AssetSubclass::Equity => "equity",
            AssetSubclass::Treasury => "treasury",
            AssetSubclass::Other => "other",
        }
    }

    /// Parses a wire name. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<AssetSubclass> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Category of a `uris` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriCategory {
    Website,
    Social,
    Docs,
    Other,
}

impl UriCategory {
    /// All categories, in declaration order.
    pub const ALL: [UriCategory; 4] = [
        UriCategory::Website,
        UriCategory::Social,
        UriCategory::Docs,
        UriCategory::Other,
    ];

    /// Wire names of all categories.
    pub const NAMES: &'static [&'static str] = &["website", "social", "docs", "other"];

    /// Returns the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            UriCategory::Website => "website",
            UriCategory::Social => "social",
            UriCategory::Docs => "docs",
            UriCategory::Other => "other",
        }
    }

    /// Parses a wire name. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<UriCategory> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}
