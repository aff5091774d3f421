use crate::error::{KlvError, KlvResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SMPTE 16-byte universal key identifying a KLV item or dataset
///
/// Universal keys are 16-byte labels registered by SMPTE/MISB that globally
/// identify a metadata element. Two keys are equal when their bytes are
/// equal; this type exists so that map lookups always compare by content,
/// never by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversalKey {
    bytes: [u8; 16],
}

impl UniversalKey {
    /// Create a universal key from a 16-byte array
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    /// Create a universal key from a byte slice
    ///
    /// # Arguments
    ///
    /// * `slice` - Byte slice, must be exactly 16 bytes long
    ///
    /// # Returns
    ///
    /// Returns `Ok(UniversalKey)` if the slice is 16 bytes, `Err(KlvError)` otherwise
    pub fn from_slice(slice: &[u8]) -> KlvResult<Self> {
        let bytes: [u8; 16] = slice.try_into().map_err(|_| {
            KlvError::InvalidData(format!(
                "Universal key must be 16 bytes, got {}",
                slice.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    /// Get the key as a byte array
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Get the key as a copied byte array
    pub fn to_bytes(&self) -> [u8; 16] {
        self.bytes
    }
}

impl fmt::Display for UniversalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_key_from_slice() {
        let bytes = [
            0x06, 0x0E, 0x2B, 0x34, 0x02, 0x0B, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x01, 0x01, 0x00,
            0x00, 0x00,
        ];
        let key = UniversalKey::from_slice(&bytes).unwrap();
        assert_eq!(key.as_bytes(), &bytes);
    }

    #[test]
    fn test_universal_key_from_slice_wrong_length() {
        assert!(UniversalKey::from_slice(&[0x06, 0x0E]).is_err());
    }

    #[test]
    fn test_universal_key_content_equality() {
        let a = UniversalKey::new([1; 16]);
        let b = UniversalKey::from_slice(&[1; 16]).unwrap();
        assert_eq!(a, b);

        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(a, "item");
        assert_eq!(map.get(&b), Some(&"item"));
    }

    #[test]
    fn test_universal_key_display() {
        let key = UniversalKey::new([
            0x06, 0x0E, 0x2B, 0x34, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ]);
        assert!(format!("{}", key).starts_with("06 0E 2B 34"));
    }
}
