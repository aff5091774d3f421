//! UAS Datalink item catalog
//!
//! Static configuration data: the MISB ST 0601.8 local-set tag table
//! (tags 1-72) with names, primitive types, and fixed-point scale ranges,
//! plus the universal keys of the Basic Universal Metadata Set. Pure
//! data; all decoding logic lives in the codec and decoder modules.

use crate::item::{ItemCodec, ItemDefinition};
use crate::local_set::decode_local_dataset;
use crate::registry::{build_registry, Registry};
use crate::universal_set::decode_universal_dataset;
use klv_codec::{PrimitiveType, ScalarCodec, ScaleRange};
use klv_core::{KlvResult, UniversalKey};

/// UAS Datalink Local Dataset universal key; its value is a local set
pub const UAS_DATALINK_LOCAL_SET_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x02, 0x0B, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x01, 0x01, 0x00, 0x00,
    0x00,
]);

/// Basic Universal Metadata Set key; its value is another universal set
pub const BASIC_UNIVERSAL_METADATA_SET_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x02, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x01, 0x02, 0x01, 0x01, 0x00,
    0x00,
]);

const USER_DEFINED_TIME_STAMP_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x03, 0x07, 0x02, 0x01, 0x01, 0x01, 0x05, 0x00,
    0x00,
]);

const DEVICE_LATITUDE_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x03, 0x07, 0x01, 0x02, 0x01, 0x02, 0x04, 0x02,
    0x00,
]);

const DEVICE_LONGITUDE_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x03, 0x07, 0x01, 0x02, 0x01, 0x02, 0x06, 0x02,
    0x00,
]);

const DEVICE_ALTITUDE_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x03, 0x07, 0x01, 0x02, 0x01, 0x02, 0x02, 0x00,
    0x00,
]);

const IMAGE_SOURCE_DEVICE_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x20, 0x01, 0x02, 0x01, 0x01, 0x00,
    0x00,
]);

const FRAME_CENTER_LATITUDE_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x07, 0x01, 0x02, 0x01, 0x03, 0x02, 0x00,
    0x00,
]);

const FRAME_CENTER_LONGITUDE_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x07, 0x01, 0x02, 0x01, 0x03, 0x04, 0x00,
    0x00,
]);

const DEVICE_DESIGNATION_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x20, 0x01, 0x00, 0x00, 0x00,
    0x00,
]);

const EPISODE_NUMBER_KEY: UniversalKey = UniversalKey::new([
    0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x01, 0x05, 0x05, 0x00, 0x00, 0x00, 0x00,
    0x00,
]);

fn unscaled(tag: u8, name: &'static str, primitive: PrimitiveType) -> ItemDefinition {
    ItemDefinition::local(tag, name, Some(ItemCodec::Primitive(ScalarCodec::new(primitive))))
}

fn text(tag: u8, name: &'static str) -> ItemDefinition {
    unscaled(tag, name, PrimitiveType::AsciiString)
}

fn raw(tag: u8, name: &'static str) -> ItemDefinition {
    ItemDefinition::local(tag, name, None)
}

fn scaled(
    tag: u8,
    name: &'static str,
    primitive: PrimitiveType,
    scale: ScaleRange,
) -> ItemDefinition {
    ItemDefinition::local(
        tag,
        name,
        Some(ItemCodec::Primitive(ScalarCodec::scaled(primitive, scale))),
    )
}

fn scaled_u8(tag: u8, name: &'static str, dst_min: f64, dst_max: f64) -> ItemDefinition {
    scaled(
        tag,
        name,
        PrimitiveType::Unsigned8,
        ScaleRange::new(0.0, 255.0, dst_min, dst_max),
    )
}

fn scaled_u16(tag: u8, name: &'static str, dst_min: f64, dst_max: f64) -> ItemDefinition {
    scaled(
        tag,
        name,
        PrimitiveType::Unsigned16,
        ScaleRange::new(0.0, 65535.0, dst_min, dst_max),
    )
}

fn scaled_u32(tag: u8, name: &'static str, dst_min: f64, dst_max: f64) -> ItemDefinition {
    scaled(
        tag,
        name,
        PrimitiveType::Unsigned32,
        ScaleRange::new(0.0, 4294967295.0, dst_min, dst_max),
    )
}

fn scaled_i16(tag: u8, name: &'static str, dst_min: f64, dst_max: f64) -> ItemDefinition {
    scaled(
        tag,
        name,
        PrimitiveType::Signed16,
        ScaleRange::new(-32767.0, 32767.0, dst_min, dst_max),
    )
}

fn scaled_i32(tag: u8, name: &'static str, dst_min: f64, dst_max: f64) -> ItemDefinition {
    scaled(
        tag,
        name,
        PrimitiveType::Signed32,
        ScaleRange::new(-2147483647.0, 2147483647.0, dst_min, dst_max),
    )
}

/// MISB ST 0601.8 local-set tag table
///
/// Angles are degrees, distances and elevations meters, speeds m/s,
/// pressures millibar, the timestamp microseconds since the Unix epoch.
pub fn uas_datalink_items() -> Vec<ItemDefinition> {
    vec![
        unscaled(1, "checksum", PrimitiveType::Unsigned16),
        unscaled(2, "unix-time-stamp", PrimitiveType::Unsigned64)
            .with_universal_key(USER_DEFINED_TIME_STAMP_KEY),
        text(3, "mission-id"),
        text(4, "platform-tail-number"),
        scaled_u16(5, "platform-heading", 0.0, 360.0),
        scaled_i16(6, "platform-pitch-angle", -20.0, 20.0),
        scaled_i16(7, "platform-roll-angle", -50.0, 50.0),
        unscaled(8, "platform-true-air-speed", PrimitiveType::Unsigned8),
        unscaled(9, "platform-indicated-air-speed", PrimitiveType::Unsigned8),
        text(10, "platform-designation"),
        text(11, "image-source-sensor").with_universal_key(IMAGE_SOURCE_DEVICE_KEY),
        text(12, "image-coordinate-system"),
        scaled_i32(13, "sensor-lat", -90.0, 90.0).with_universal_key(DEVICE_LATITUDE_KEY),
        scaled_i32(14, "sensor-lon", -180.0, 180.0).with_universal_key(DEVICE_LONGITUDE_KEY),
        scaled_u16(15, "sensor-true-alt", -900.0, 19000.0)
            .with_universal_key(DEVICE_ALTITUDE_KEY),
        scaled_u16(16, "sensor-horizontal-fov", 0.0, 180.0),
        scaled_u16(17, "sensor-vertical-fov", 0.0, 180.0),
        scaled_u32(18, "sensor-relative-azimuth-angle", 0.0, 360.0),
        scaled_i32(19, "sensor-relative-elevation-angle", -180.0, 180.0),
        scaled_u32(20, "sensor-relative-roll-angle", 0.0, 360.0),
        scaled_u32(21, "slant-range", 0.0, 5_000_000.0),
        scaled_u16(22, "target-width", 0.0, 10_000.0),
        scaled_i32(23, "frame-center-lat", -90.0, 90.0)
            .with_universal_key(FRAME_CENTER_LATITUDE_KEY),
        scaled_i32(24, "frame-center-lon", -180.0, 180.0)
            .with_universal_key(FRAME_CENTER_LONGITUDE_KEY),
        scaled_u16(25, "frame-center-elevation", -900.0, 19000.0),
        scaled_i16(26, "offset-corner-lat-1", -0.075, 0.075),
        scaled_i16(27, "offset-corner-lon-1", -0.075, 0.075),
        scaled_i16(28, "offset-corner-lat-2", -0.075, 0.075),
        scaled_i16(29, "offset-corner-lon-2", -0.075, 0.075),
        scaled_i16(30, "offset-corner-lat-3", -0.075, 0.075),
        scaled_i16(31, "offset-corner-lon-3", -0.075, 0.075),
        scaled_i16(32, "offset-corner-lat-4", -0.075, 0.075),
        scaled_i16(33, "offset-corner-lon-4", -0.075, 0.075),
        unscaled(34, "icing-detected", PrimitiveType::Unsigned8),
        scaled_u16(35, "wind-direction", 0.0, 360.0),
        scaled_u8(36, "wind-speed", 0.0, 100.0),
        scaled_u16(37, "static-pressure", 0.0, 5000.0),
        scaled_u16(38, "density-altitude", -900.0, 19000.0),
        unscaled(39, "outside-air-temp", PrimitiveType::Signed8),
        scaled_i32(40, "target-location-lat", -90.0, 90.0),
        scaled_i32(41, "target-location-lon", -180.0, 180.0),
        scaled_u16(42, "target-location-elevation", -900.0, 19000.0),
        unscaled(43, "target-track-gate-width", PrimitiveType::Unsigned8),
        unscaled(44, "target-track-gate-height", PrimitiveType::Unsigned8),
        unscaled(45, "target-error-estimate-ce90", PrimitiveType::Unsigned16),
        unscaled(46, "target-error-estimate-le90", PrimitiveType::Unsigned16),
        unscaled(47, "generic-flag-data-01", PrimitiveType::Unsigned8),
        raw(48, "security-local-metadata-set"),
        scaled_u16(49, "differential-pressure", 0.0, 5000.0),
        scaled_i16(50, "platform-angle-of-attack", -20.0, 20.0),
        scaled_i16(51, "platform-vertical-speed", -180.0, 180.0),
        scaled_i16(52, "platform-sideslip-angle", -20.0, 20.0),
        scaled_u16(53, "airfield-barometric-pressure", 0.0, 5000.0),
        scaled_u16(54, "airfield-elevation", -900.0, 19000.0),
        scaled_u8(55, "relative-humidity", 0.0, 100.0),
        unscaled(56, "platform-ground-speed", PrimitiveType::Unsigned8),
        scaled_u32(57, "ground-range", 0.0, 5_000_000.0),
        scaled_u16(58, "platform-fuel-remaining", 0.0, 10_000.0),
        text(59, "platform-call-sign"),
        unscaled(60, "weapon-load", PrimitiveType::Unsigned16),
        unscaled(61, "weapon-fired", PrimitiveType::Unsigned8),
        unscaled(62, "laser-prf-code", PrimitiveType::Unsigned16),
        unscaled(63, "sensor-fov-name", PrimitiveType::Unsigned8),
        scaled_u16(64, "platform-magnetic-heading", 0.0, 360.0),
        unscaled(65, "uas-ls-version-number", PrimitiveType::Unsigned8),
        raw(66, "target-location-covariance-matrix"),
        scaled_i32(67, "alternate-platform-lat", -90.0, 90.0),
        scaled_i32(68, "alternate-platform-lon", -180.0, 180.0),
        scaled_u16(69, "alternate-platform-altitude", -900.0, 19000.0),
        text(70, "alternate-platform-name"),
        scaled_u16(71, "alternate-platform-heading", 0.0, 360.0),
        unscaled(72, "event-start-time-utc", PrimitiveType::Unsigned64),
    ]
}

/// Items addressed only by a universal key, plus the two container keys
pub fn universal_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::universal(
            UAS_DATALINK_LOCAL_SET_KEY,
            "uas-datalink-local-set",
            Some(ItemCodec::Nested(decode_local_dataset)),
        ),
        ItemDefinition::universal(
            BASIC_UNIVERSAL_METADATA_SET_KEY,
            "basic-universal-metadata-set",
            Some(ItemCodec::Nested(decode_universal_dataset)),
        ),
        ItemDefinition::universal(
            DEVICE_DESIGNATION_KEY,
            "device-designation",
            Some(ItemCodec::Primitive(ScalarCodec::new(
                PrimitiveType::AsciiString,
            ))),
        ),
        ItemDefinition::universal(
            EPISODE_NUMBER_KEY,
            "episode-number",
            Some(ItemCodec::Primitive(ScalarCodec::new(
                PrimitiveType::AsciiString,
            ))),
        ),
    ]
}

/// Build the sealed registry over the full default catalog
pub fn default_registry() -> KlvResult<Registry> {
    let mut items = uas_datalink_items();
    items.extend(universal_items());
    build_registry(items)
}
