//! Wire-level codecs for KLV metadata
//!
//! This crate provides the byte-level building blocks of the KLV format:
//! key widths and length field encodings (including BER short/long forms),
//! the tolerant key/value splitter, and the scalar codec that turns value
//! bytes into typed, optionally scaled numbers.

pub mod scalar;
pub mod splitter;
pub mod types;

pub use scalar::{PrimitiveType, ScalarCodec, ScaleRange};
pub use splitter::{split_all, RawSet};
pub use types::{KeyLength, LengthEncoding};
