//! Decoded value types for KLV telemetry metadata

pub mod decoded_tag;
pub mod value;

pub use decoded_tag::{DecodedTag, RawKey};
pub use value::KlvValue;
