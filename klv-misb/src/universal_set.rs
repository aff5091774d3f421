//! Universal dataset decoder
//!
//! A universal set identifies its members by globally unique 16-byte keys
//! with BER-encoded lengths. Container items (the UAS Datalink Local Set
//! key, the Basic Universal Metadata Set key) carry a nested decoder in
//! their registry entry and recurse on the value bytes.

use crate::registry::Registry;
use klv_codec::{split_all, KeyLength, LengthEncoding};
use klv_core::{DecodedTag, RawKey, UniversalKey};

/// Decode a buffer of one or more universal-keyed sets
///
/// # Arguments
/// * `bytes` - Buffer of concatenated 16-byte-keyed KLV sets
/// * `registry` - Sealed item registry resolving universal keys
///
/// # Returns
/// Decoded tags in input order. Keys with a registry entry decode per
/// their item rule, recursing into nested datasets; keys without one are
/// preserved as `Unknown` with the full 16-byte key and value bytes -
/// undefined keys in the standard must survive a decode round for
/// forward compatibility. Malformed input ends the scan early with the
/// partial result.
pub fn decode_universal_dataset(bytes: &[u8], registry: &Registry) -> Vec<DecodedTag> {
    let mut tags = Vec::new();

    for set in split_all(bytes, 0, KeyLength::SixteenBytes, LengthEncoding::Ber) {
        // 16-byte slice by construction
        let key = match UniversalKey::from_slice(set.key) {
            Ok(key) => key,
            Err(e) => {
                log::debug!("Stopped universal set scan: {}", e);
                break;
            }
        };

        match registry.lookup_by_universal_key(&key) {
            Some(item) => tags.push(DecodedTag::Known {
                name: item.name,
                value: item.decode_value(set.value, registry),
            }),
            None => {
                log::debug!("Unknown universal key [{}] ({} byte(s))", key, set.value.len());
                tags.push(DecodedTag::Unknown {
                    key: RawKey::Universal(key),
                    bytes: set.value.to_vec(),
                });
            }
        }
    }

    tags
}
