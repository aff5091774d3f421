//! Scalar value codec
//!
//! Decodes a fixed-width big-endian integer or ASCII value and optionally
//! applies the linear scale transform that maps the integer's fixed-point
//! domain onto a physical-unit range (degrees, meters, m/s).

use klv_core::KlvValue;

/// Primitive wire type of a scalar item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Unsigned8,
    Unsigned16,
    Unsigned32,
    Unsigned64,
    Signed8,
    Signed16,
    Signed32,
    AsciiString,
}

impl PrimitiveType {
    /// Byte width of the type on the wire (0 for strings)
    pub fn width(&self) -> usize {
        match self {
            PrimitiveType::Unsigned8 | PrimitiveType::Signed8 => 1,
            PrimitiveType::Unsigned16 | PrimitiveType::Signed16 => 2,
            PrimitiveType::Unsigned32 | PrimitiveType::Signed32 => 4,
            PrimitiveType::Unsigned64 => 8,
            PrimitiveType::AsciiString => 0,
        }
    }
}

/// Linear mapping from a fixed-point integer domain to a physical range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    pub src_min: f64,
    pub src_max: f64,
    pub dst_min: f64,
    pub dst_max: f64,
}

impl ScaleRange {
    pub const fn new(src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> Self {
        Self {
            src_min,
            src_max,
            dst_min,
            dst_max,
        }
    }

    /// Apply the scale transform to a raw integer value
    pub fn apply(&self, raw: f64) -> f64 {
        self.dst_min
            + (raw - self.src_min) / (self.src_max - self.src_min) * (self.dst_max - self.dst_min)
    }
}

/// Decode rule for a scalar item: a primitive type plus an optional scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarCodec {
    pub primitive: PrimitiveType,
    pub scale: Option<ScaleRange>,
}

impl ScalarCodec {
    pub const fn new(primitive: PrimitiveType) -> Self {
        Self {
            primitive,
            scale: None,
        }
    }

    pub const fn scaled(primitive: PrimitiveType, scale: ScaleRange) -> Self {
        Self {
            primitive,
            scale: Some(scale),
        }
    }

    /// Decode value bytes into a typed value
    ///
    /// Integer types read up to the type's width, big-endian, most
    /// significant bytes first. Short input is right-aligned: missing
    /// bytes count as leading zeros, and signed types take their sign
    /// only from the bits actually captured (no sign extension past the
    /// available bytes). With a scale range attached the result is the
    /// scaled `Float64`; otherwise it is the raw typed integer. ASCII
    /// decodes all available bytes as text.
    pub fn decode(&self, bytes: &[u8]) -> KlvValue {
        if self.primitive == PrimitiveType::AsciiString {
            return KlvValue::Text(String::from_utf8_lossy(bytes).into_owned());
        }

        let acc = accumulate(bytes, self.primitive.width());
        match self.scale {
            Some(scale) => KlvValue::Float64(scale.apply(raw_as_f64(self.primitive, acc))),
            None => typed_value(self.primitive, acc),
        }
    }
}

/// Fold up to `width` big-endian bytes into an unsigned accumulator
fn accumulate(bytes: &[u8], width: usize) -> u64 {
    let take = bytes.len().min(width);
    let mut acc = 0u64;
    for &byte in &bytes[..take] {
        acc = (acc << 8) | byte as u64;
    }
    acc
}

/// Interpret the accumulator as the declared type, as a float for scaling
fn raw_as_f64(primitive: PrimitiveType, acc: u64) -> f64 {
    match primitive {
        PrimitiveType::Unsigned8 => (acc as u8) as f64,
        PrimitiveType::Unsigned16 => (acc as u16) as f64,
        PrimitiveType::Unsigned32 => (acc as u32) as f64,
        PrimitiveType::Unsigned64 => acc as f64,
        PrimitiveType::Signed8 => (acc as u8 as i8) as f64,
        PrimitiveType::Signed16 => (acc as u16 as i16) as f64,
        PrimitiveType::Signed32 => (acc as u32 as i32) as f64,
        PrimitiveType::AsciiString => 0.0,
    }
}

/// Wrap the accumulator in the matching typed value
fn typed_value(primitive: PrimitiveType, acc: u64) -> KlvValue {
    match primitive {
        PrimitiveType::Unsigned8 => KlvValue::Unsigned8(acc as u8),
        PrimitiveType::Unsigned16 => KlvValue::Unsigned16(acc as u16),
        PrimitiveType::Unsigned32 => KlvValue::Unsigned32(acc as u32),
        PrimitiveType::Unsigned64 => KlvValue::Unsigned64(acc),
        PrimitiveType::Signed8 => KlvValue::Signed8(acc as u8 as i8),
        PrimitiveType::Signed16 => KlvValue::Signed16(acc as u16 as i16),
        PrimitiveType::Signed32 => KlvValue::Signed32(acc as u32 as i32),
        PrimitiveType::AsciiString => KlvValue::Text(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unsigned16() {
        let codec = ScalarCodec::new(PrimitiveType::Unsigned16);
        assert_eq!(codec.decode(&[0x71, 0xC2]), KlvValue::Unsigned16(0x71C2));
    }

    #[test]
    fn test_decode_short_input_right_aligned() {
        let codec = ScalarCodec::new(PrimitiveType::Unsigned32);
        assert_eq!(codec.decode(&[0x01, 0x02]), KlvValue::Unsigned32(0x0102));
        assert_eq!(codec.decode(&[]), KlvValue::Unsigned32(0));
    }

    #[test]
    fn test_decode_signed_no_extension_on_short_input() {
        let codec = ScalarCodec::new(PrimitiveType::Signed16);
        // One byte of a two-byte type: sign bit not captured
        assert_eq!(codec.decode(&[0xFF]), KlvValue::Signed16(255));
        // Full width: two's complement applies
        assert_eq!(codec.decode(&[0xFF, 0xFE]), KlvValue::Signed16(-2));
    }

    #[test]
    fn test_decode_extra_bytes_ignored() {
        let codec = ScalarCodec::new(PrimitiveType::Unsigned8);
        assert_eq!(codec.decode(&[0x2A, 0xFF, 0xFF]), KlvValue::Unsigned8(0x2A));
    }

    #[test]
    fn test_decode_scaled_heading() {
        let codec = ScalarCodec::scaled(
            PrimitiveType::Unsigned16,
            ScaleRange::new(0.0, 65535.0, 0.0, 360.0),
        );
        let value = codec.decode(&[0x71, 0xC2]).as_float64().unwrap();
        assert!((value - 159.9744).abs() < 1e-4);
    }

    #[test]
    fn test_decode_scaled_latitude() {
        let codec = ScalarCodec::scaled(
            PrimitiveType::Signed32,
            ScaleRange::new(-2147483647.0, 2147483647.0, -90.0, 90.0),
        );
        let value = codec.decode(&[0x55, 0x95, 0xB6, 0x6D]).as_float64().unwrap();
        assert!((value - 60.1768229669783).abs() < 1e-12);
    }

    #[test]
    fn test_decode_scaled_negative_latitude() {
        let codec = ScalarCodec::scaled(
            PrimitiveType::Signed32,
            ScaleRange::new(-2147483647.0, 2147483647.0, -90.0, 90.0),
        );
        let raw = (-1435874925i32).to_be_bytes();
        let value = codec.decode(&raw).as_float64().unwrap();
        assert!((value + 60.1768229669783).abs() < 1e-12);
    }

    #[test]
    fn test_decode_ascii() {
        let codec = ScalarCodec::new(PrimitiveType::AsciiString);
        assert_eq!(
            codec.decode(b"MISSION01"),
            KlvValue::Text("MISSION01".to_string())
        );
        assert_eq!(codec.decode(b""), KlvValue::Text(String::new()));
    }

    #[test]
    fn test_decode_unsigned64_timestamp() {
        let codec = ScalarCodec::new(PrimitiveType::Unsigned64);
        let micros = 1_224_807_209_913_000u64;
        assert_eq!(
            codec.decode(&micros.to_be_bytes()),
            KlvValue::Unsigned64(micros)
        );
    }
}
