//! Utility modules for metadata handling.

pub mod predicates;

pub use predicates::{is_map, is_string, is_upper_alphanumeric};
