//! Data model types for token metadata.
//!
//! - Key names (long and compact forms)
//! - Closed vocabularies (asset class, subclass, URI category)
//! - The typed metadata record and its builder
//! - The issuance ledger entry that stores encoded metadata

pub mod asset;
pub mod builder;
pub mod keys;
pub mod ledger;
pub mod metadata;

pub use asset::{AssetClass, AssetSubclass, UriCategory};
pub use builder::MetadataBuilder;
pub use keys::FieldKey;
pub use ledger::MPTokenIssuance;
pub use metadata::{AdditionalInfo, MPTokenMetadata, MetadataUri};
