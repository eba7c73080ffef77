//! XLS-89 token metadata: canonical encoding, decoding and validation.
//!
//! Multi-purpose token issuances carry descriptive metadata as a hex string
//! stored immutably on the ledger. This crate defines the typed record, the
//! canonical hex form it is stored in, and the validator that decides whether
//! a hex payload may be stored at all.
//!
//! # Quick Start
//!
//! ```rust
//! use mpt_metadata::{decode_metadata, encode_metadata, validate_metadata};
//! use mpt_metadata::model::{AssetClass, MetadataBuilder};
//!
//! let metadata = MetadataBuilder::new("TBILL", "T-Bill Token", "https://example.com/icon.png", AssetClass::Defi, "Example Co.")
//!     .desc("Short-term treasury exposure")
//!     .build();
//!
//! // Encode to canonical hex
//! let hex = encode_metadata(&metadata).unwrap();
//! assert!(validate_metadata(&hex).is_empty());
//!
//! // Decode back
//! let decoded = decode_metadata(&hex).unwrap();
//! assert_eq!(decoded, metadata);
//! assert_eq!(encode_metadata(&decoded).unwrap(), hex);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Typed record, vocabularies, key names, builder, issuance entry
//! - [`codec`]: Canonical hex/JSON encoding and lenient decoding
//! - [`validate`]: Field schema, key resolution and the validation pipeline
//! - [`error`]: Error types
//! - [`limits`]: Size and count limits
//! - [`util`]: Primitive predicates
//!
//! # Canonical Form
//!
//! Encoding uses compact keys only (`t`, `n`, `ac`, ...), sorts every object's
//! keys, omits absent optional fields and hex-encodes in upper case. Equal
//! records therefore always produce identical bytes.
//!
//! # Lenient Decode, Strict Validate
//!
//! [`decode_metadata`] accepts long or compact keys and silently prefers the
//! compact one when both appear. [`validate_metadata`] rejects that case with
//! [`ValidationError::FieldCollision`]. Validate before storing; decode when
//! reading.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{decode_metadata, encode_metadata, encode_metadata_json};
pub use error::{DecodeError, EncodeError, ErrorKind, ValidationError};
pub use model::{
    AdditionalInfo, AssetClass, AssetSubclass, FieldKey, MPTokenIssuance, MPTokenMetadata,
    MetadataBuilder, MetadataUri, UriCategory,
};
pub use validate::{validate_metadata, validate_raw};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Metadata standard this crate implements.
pub const STANDARD: &str = "XLS-89";
