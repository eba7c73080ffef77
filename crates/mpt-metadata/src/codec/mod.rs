//! Canonical hex/JSON encoding of token metadata.

pub mod metadata;
pub mod primitives;

pub use metadata::{
    decode_metadata, encode_metadata, encode_metadata_json, metadata_from_json, metadata_to_json,
};
pub use primitives::{
    RawMetadata, canonicalize, canonicalize_map, decode_hex, encode_hex, parse_object,
};
