//! Decoded scalar and container values

use crate::datatypes::decoded_tag::DecodedTag;
use crate::error::{KlvError, KlvResult};
use serde::Serialize;
use std::fmt;

/// Container class holding one decoded KLV value
///
/// A value is either a typed integer straight off the wire, a scaled
/// physical quantity (`Float64`, produced when the item carries a linear
/// scale range), a text string, raw bytes (items with no attached decode
/// rule), or a nested sequence of decoded tags for container items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum KlvValue {
    /// Unsigned integer 8-bit
    Unsigned8(u8),
    /// Unsigned integer 16-bit
    Unsigned16(u16),
    /// Unsigned integer 32-bit
    Unsigned32(u32),
    /// Unsigned integer 64-bit
    Unsigned64(u64),
    /// Integer 8-bit
    Signed8(i8),
    /// Integer 16-bit
    Signed16(i16),
    /// Integer 32-bit
    Signed32(i32),
    /// Scaled physical quantity (degrees, meters, m/s, ...)
    Float64(f64),
    /// ASCII/UTF-8 text
    Text(String),
    /// Raw value bytes
    Bytes(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Nested dataset
    Set(Vec<DecodedTag>),
}

impl KlvValue {
    /// Check if this value is an integer or scaled number
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            KlvValue::Unsigned8(_)
                | KlvValue::Unsigned16(_)
                | KlvValue::Unsigned32(_)
                | KlvValue::Unsigned64(_)
                | KlvValue::Signed8(_)
                | KlvValue::Signed16(_)
                | KlvValue::Signed32(_)
                | KlvValue::Float64(_)
        )
    }

    /// Check if this value is a nested dataset
    pub fn is_set(&self) -> bool {
        matches!(self, KlvValue::Set(_))
    }

    /// Get the value as a scaled f64
    pub fn as_float64(&self) -> KlvResult<f64> {
        match self {
            KlvValue::Float64(v) => Ok(*v),
            _ => Err(KlvError::InvalidData(format!(
                "Expected Float64, got {}",
                self
            ))),
        }
    }

    /// Get the value as text
    pub fn as_text(&self) -> KlvResult<&str> {
        match self {
            KlvValue::Text(s) => Ok(s),
            _ => Err(KlvError::InvalidData(format!("Expected Text, got {}", self))),
        }
    }

    /// Get the value as raw bytes
    pub fn as_bytes(&self) -> KlvResult<&[u8]> {
        match self {
            KlvValue::Bytes(b) => Ok(b),
            _ => Err(KlvError::InvalidData(format!(
                "Expected Bytes, got {}",
                self
            ))),
        }
    }

    /// Get the value as a nested dataset
    pub fn as_set(&self) -> KlvResult<&[DecodedTag]> {
        match self {
            KlvValue::Set(tags) => Ok(tags),
            _ => Err(KlvError::InvalidData(format!("Expected Set, got {}", self))),
        }
    }
}

impl fmt::Display for KlvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KlvValue::Unsigned8(v) => write!(f, "UNSIGNED8: {}", v),
            KlvValue::Unsigned16(v) => write!(f, "UNSIGNED16: {}", v),
            KlvValue::Unsigned32(v) => write!(f, "UNSIGNED32: {}", v),
            KlvValue::Unsigned64(v) => write!(f, "UNSIGNED64: {}", v),
            KlvValue::Signed8(v) => write!(f, "SIGNED8: {}", v),
            KlvValue::Signed16(v) => write!(f, "SIGNED16: {}", v),
            KlvValue::Signed32(v) => write!(f, "SIGNED32: {}", v),
            KlvValue::Float64(v) => write!(f, "FLOAT64: {}", v),
            KlvValue::Text(s) => write!(f, "TEXT: {}", s),
            KlvValue::Bytes(b) => {
                write!(f, "BYTES:")?;
                for byte in b {
                    write!(f, " {:02X}", byte)?;
                }
                Ok(())
            }
            KlvValue::Set(tags) => {
                write!(f, "SET: {} tag(s)", tags.len())?;
                for (i, tag) in tags.iter().enumerate() {
                    write!(f, "\n  [{}]: {}", i, tag)?;
                }
                Ok(())
            }
        }
    }
}
