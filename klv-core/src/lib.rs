//! Core types and utilities for MISB KLV telemetry decoding
//!
//! This crate provides the fundamental types, error handling, and decoded
//! value model used throughout the KLV implementation.

pub mod datatypes;
pub mod error;
pub mod universal_key;

pub use datatypes::{DecodedTag, KlvValue, RawKey};
pub use error::{KlvError, KlvResult};
pub use universal_key::UniversalKey;
