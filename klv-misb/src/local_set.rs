//! Local dataset decoder
//!
//! A local set identifies its members by single-byte tag numbers local to
//! the containing dataset, with BER-encoded lengths. Tag numbers are read
//! as one byte and must not exceed 127; multi-byte tag numbers are not
//! supported, so a tag byte with the high bit set ends the scan (observed
//! UAS Datalink captures do not use them, and guessing an extension would
//! misparse everything that follows).

use crate::registry::Registry;
use klv_codec::{split_all, KeyLength, LengthEncoding};
use klv_core::{DecodedTag, RawKey};

/// Decode the payload of a local-set container item
///
/// # Arguments
/// * `bytes` - The value portion of a Local-Set-tagged item
/// * `registry` - Sealed item registry resolving tag numbers
///
/// # Returns
/// Decoded tags in input order. Tags found in the registry decode per
/// their item rule (raw bytes when the item has no rule attached); tags
/// with no registry entry are preserved as `Unknown`. Malformed input
/// ends the scan early with the partial result.
pub fn decode_local_dataset(bytes: &[u8], registry: &Registry) -> Vec<DecodedTag> {
    let mut tags = Vec::new();

    for set in split_all(bytes, 0, KeyLength::OneByte, LengthEncoding::Ber) {
        let tag = set.key[0];
        if tag > 127 {
            log::warn!(
                "Stopped local set scan: tag byte 0x{:02X} exceeds single-byte range",
                tag
            );
            break;
        }

        match registry.lookup_by_local_tag(tag) {
            Some(item) => tags.push(DecodedTag::Known {
                name: item.name,
                value: item.decode_value(set.value, registry),
            }),
            None => {
                log::debug!("Unknown local tag {} ({} byte(s))", tag, set.value.len());
                tags.push(DecodedTag::Unknown {
                    key: RawKey::Local(tag),
                    bytes: set.value.to_vec(),
                });
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uas_datalink::default_registry;
    use klv_core::KlvValue;

    #[test]
    fn test_decode_platform_heading() {
        let registry = default_registry().unwrap();
        let tags = decode_local_dataset(&[0x05, 0x02, 0x71, 0xC2], &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), Some("platform-heading"));
        let heading = tags[0].value().unwrap().as_float64().unwrap();
        assert!((heading - 159.9744).abs() < 1e-4);
    }

    #[test]
    fn test_decode_sensor_lat() {
        let registry = default_registry().unwrap();
        let tags = decode_local_dataset(&[0x0D, 0x04, 0x55, 0x95, 0xB6, 0x6D], &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), Some("sensor-lat"));
        let lat = tags[0].value().unwrap().as_float64().unwrap();
        assert!((lat - 60.1768229669783).abs() < 1e-12);
    }

    #[test]
    fn test_decode_mission_id_ascii() {
        let registry = default_registry().unwrap();
        let mut buffer = vec![0x03, 0x09];
        buffer.extend_from_slice(b"MISSION01");
        let tags = decode_local_dataset(&buffer, &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), Some("mission-id"));
        assert_eq!(
            tags[0].value().unwrap().as_text().unwrap(),
            "MISSION01"
        );
    }

    #[test]
    fn test_decode_two_entries_in_order() {
        let registry = default_registry().unwrap();
        let buffer = [0x0B, 0x02, b'E', b'O', 0x05, 0x02, 0x71, 0xC2];
        let tags = decode_local_dataset(&buffer, &registry);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name(), Some("image-source-sensor"));
        assert_eq!(tags[0].value().unwrap().as_text().unwrap(), "EO");
        assert_eq!(tags[1].name(), Some("platform-heading"));
        let heading = tags[1].value().unwrap().as_float64().unwrap();
        assert!((heading - 159.9744).abs() < 1e-4);
    }

    #[test]
    fn test_decode_unknown_tag_preserved() {
        let registry = default_registry().unwrap();
        let tags = decode_local_dataset(&[0x7F, 0x02, 0xDE, 0xAD], &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags[0],
            DecodedTag::Unknown {
                key: RawKey::Local(0x7F),
                bytes: vec![0xDE, 0xAD],
            }
        );
    }

    #[test]
    fn test_decode_truncated_value_uses_available_bytes() {
        let registry = default_registry().unwrap();
        // sensor-lat declares 4 bytes, only 2 present: decode right-aligned
        let tags = decode_local_dataset(&[0x0D, 0x04, 0x55, 0x95], &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), Some("sensor-lat"));
        let lat = tags[0].value().unwrap().as_float64().unwrap();
        let expected = -90.0 + (0x5595 as f64 + 2147483647.0) / 4294967294.0 * 180.0;
        assert!((lat - expected).abs() < 1e-12);
    }

    #[test]
    fn test_decode_stops_on_high_tag_byte() {
        let registry = default_registry().unwrap();
        let buffer = [0x05, 0x02, 0x71, 0xC2, 0x80, 0x01, 0x00];
        let tags = decode_local_dataset(&buffer, &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), Some("platform-heading"));
    }

    #[test]
    fn test_decode_item_without_rule_yields_bytes() {
        let registry = default_registry().unwrap();
        // security-local-metadata-set (tag 48) is known but carries no rule
        let tags = decode_local_dataset(&[0x30, 0x02, 0x01, 0x02], &registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), Some("security-local-metadata-set"));
        assert_eq!(
            tags[0].value().unwrap(),
            &KlvValue::Bytes(vec![0x01, 0x02])
        );
    }
}
