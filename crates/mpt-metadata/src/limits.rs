//! Limits enforced by the metadata validator.

/// Maximum size of the decoded metadata payload in bytes.
pub const MAX_METADATA_BYTES: usize = 1024;

/// Number of recognized top-level fields. A payload with more keys than this
/// is rejected even if every key is known.
pub const MAX_TOP_LEVEL_FIELDS: usize = 9;

/// Exact number of keys in each `uris` entry.
pub const URI_FIELD_COUNT: usize = 3;

/// Maximum ticker length in characters.
pub const MAX_TICKER_LEN: usize = 6;
