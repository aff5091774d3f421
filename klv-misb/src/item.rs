//! Item definitions: the unit of registry configuration
//!
//! An item ties a telemetry field name to its local-set tag number and/or
//! 16-byte universal key, plus the rule for decoding its value bytes.

use crate::registry::Registry;
use klv_codec::ScalarCodec;
use klv_core::{DecodedTag, KlvValue, UniversalKey};

/// Decode rule attached to an item
///
/// `Primitive` covers fixed-width integers, strings, and scaled physical
/// quantities. `Nested` names a decoder function applied recursively to
/// the value bytes of a container item, resolving sub-keys through the
/// same registry. Explicit variants, dispatched by match, replace the
/// duck-typed decoder objects of dynamic implementations.
#[derive(Debug, Clone, Copy)]
pub enum ItemCodec {
    /// Fixed-width scalar with optional linear scale
    Primitive(ScalarCodec),
    /// Container whose value is itself a dataset
    Nested(fn(&[u8], &Registry) -> Vec<DecodedTag>),
}

/// One entry of the item catalog
///
/// At least one of `local_tag`/`universal_key` must be present; items
/// known by name but without a decode rule (`codec: None`) surface their
/// value as raw bytes.
#[derive(Debug, Clone)]
pub struct ItemDefinition {
    pub name: &'static str,
    pub local_tag: Option<u8>,
    pub universal_key: Option<UniversalKey>,
    pub codec: Option<ItemCodec>,
}

impl ItemDefinition {
    /// Define an item addressed by a local-set tag number
    pub fn local(tag: u8, name: &'static str, codec: Option<ItemCodec>) -> Self {
        Self {
            name,
            local_tag: Some(tag),
            universal_key: None,
            codec,
        }
    }

    /// Define an item addressed by a 16-byte universal key
    pub fn universal(key: UniversalKey, name: &'static str, codec: Option<ItemCodec>) -> Self {
        Self {
            name,
            local_tag: None,
            universal_key: Some(key),
            codec,
        }
    }

    /// Attach a universal key to a local-tag item
    pub fn with_universal_key(mut self, key: UniversalKey) -> Self {
        self.universal_key = Some(key);
        self
    }

    /// Decode value bytes according to this item's rule
    ///
    /// Items without a codec yield the raw bytes; nested codecs recurse
    /// through `registry`.
    pub fn decode_value(&self, bytes: &[u8], registry: &Registry) -> KlvValue {
        match &self.codec {
            Some(ItemCodec::Primitive(codec)) => codec.decode(bytes),
            Some(ItemCodec::Nested(decode)) => KlvValue::Set(decode(bytes, registry)),
            None => KlvValue::Bytes(bytes.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use klv_codec::PrimitiveType;

    #[test]
    fn test_item_without_codec_yields_raw_bytes() {
        let item = ItemDefinition::local(48, "security-local-metadata-set", None);
        let registry = RegistryBuilder::new().build();
        assert_eq!(
            item.decode_value(&[0x01, 0x02], &registry),
            KlvValue::Bytes(vec![0x01, 0x02])
        );
    }

    #[test]
    fn test_primitive_item_decodes_scalar() {
        let item = ItemDefinition::local(
            8,
            "platform-true-air-speed",
            Some(ItemCodec::Primitive(ScalarCodec::new(
                PrimitiveType::Unsigned8,
            ))),
        );
        let registry = RegistryBuilder::new().build();
        assert_eq!(
            item.decode_value(&[0x93], &registry),
            KlvValue::Unsigned8(0x93)
        );
    }
}
