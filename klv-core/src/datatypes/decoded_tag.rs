//! Decoded tag entries produced by dataset decoders

use crate::datatypes::value::KlvValue;
use crate::universal_key::UniversalKey;
use serde::Serialize;
use std::fmt;

/// Raw key of a KLV entry with no registry mapping
///
/// Either a single-byte local-set tag number or a full 16-byte universal
/// key, preserved exactly as read from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RawKey {
    /// Local-set tag number (0-127)
    Local(u8),
    /// 16-byte universal key
    Universal(UniversalKey),
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Local(tag) => write!(f, "tag {}", tag),
            RawKey::Universal(key) => write!(f, "key [{}]", key),
        }
    }
}

/// One entry of a decoded dataset, in input order
///
/// `Known` entries resolved through the registry carry the item name and a
/// decoded value. `Unknown` entries preserve the raw key and value bytes so
/// that undefined keys in a capture are never silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DecodedTag {
    /// Entry resolved through the item registry
    Known {
        name: &'static str,
        value: KlvValue,
    },
    /// Entry with no registry mapping, raw key and bytes preserved
    Unknown {
        key: RawKey,
        #[serde(with = "serde_bytes")]
        bytes: Vec<u8>,
    },
}

impl DecodedTag {
    /// Get the item name, if the entry is known
    pub fn name(&self) -> Option<&'static str> {
        match self {
            DecodedTag::Known { name, .. } => Some(name),
            DecodedTag::Unknown { .. } => None,
        }
    }

    /// Get the decoded value, if the entry is known
    pub fn value(&self) -> Option<&KlvValue> {
        match self {
            DecodedTag::Known { value, .. } => Some(value),
            DecodedTag::Unknown { .. } => None,
        }
    }

    /// Check if the entry is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, DecodedTag::Unknown { .. })
    }
}

impl fmt::Display for DecodedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedTag::Known { name, value } => write!(f, "{} = {}", name, value),
            DecodedTag::Unknown { key, bytes } => {
                write!(f, "unknown {} ({} byte(s))", key, bytes.len())
            }
        }
    }
}
