//! MISB KLV telemetry metadata decoder
//!
//! Decodes Key-Length-Value encoded telemetry metadata embedded in drone
//! video streams, per the MISB UAS Datalink Local Set (ST 0601.8) and
//! Basic Universal Metadata Set standards.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `klv-core`: Error handling, universal key, decoded value model
//! - `klv-codec`: BER length codec, key/value splitter, scalar codec
//! - `klv-misb`: Item registry, dataset decoders, MISB item catalog
//!
//! # Usage
//!
//! ```
//! use klv::misb::{decode_universal_dataset, default_registry};
//!
//! let registry = default_registry().expect("default catalog is consistent");
//! let bytes: &[u8] = &[];
//! for tag in decode_universal_dataset(bytes, &registry) {
//!     println!("{}", tag);
//! }
//! ```
//!
//! Decoding is synchronous and side-effect-free; the registry is sealed
//! after construction, so independent buffers may be decoded from
//! multiple threads against one shared registry.

// Re-export core types
pub use klv_core::{DecodedTag, KlvError, KlvResult, KlvValue, RawKey, UniversalKey};

// Re-export wire-level codecs
pub mod codec {
    pub use klv_codec::*;
}

// Re-export registry and dataset decoders
pub mod misb {
    pub use klv_misb::*;
}
