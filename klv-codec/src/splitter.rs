//! Tolerant key/value splitter
//!
//! Walks a byte buffer and extracts successive (key, length, value)
//! triples for a given key width and length encoding. Telemetry captures
//! from lossy sources are routinely truncated mid-set, so the splitter
//! never hard-fails: a malformed key or length field stops the scan and
//! whatever parsed cleanly up to that point is returned, and a value
//! shorter than its declared length is taken as-is.

use crate::types::{KeyLength, LengthEncoding};

/// One parsed (key, value) pair borrowed from the input buffer
///
/// `end` is the buffer offset immediately past the consumed value, where
/// the next set begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSet<'a> {
    /// Key bytes, exactly `KeyLength::value()` long
    pub key: &'a [u8],
    /// Value bytes, possibly shorter than the declared length
    pub value: &'a [u8],
    /// Offset just past this set
    pub end: usize,
}

/// Split `buffer` starting at `offset` into successive raw KLV sets
///
/// # Arguments
/// * `buffer` - Input bytes
/// * `offset` - Where to start parsing
/// * `key_length` - Key width assumed for every set
/// * `length_encoding` - Length field encoding assumed for every set
///
/// # Returns
/// The sets parsed in input order. A malformed key or length field ends
/// the scan early with the partial result; a declared value length that
/// exceeds the remaining bytes is truncated to what remains.
pub fn split_all<'a>(
    buffer: &'a [u8],
    offset: usize,
    key_length: KeyLength,
    length_encoding: LengthEncoding,
) -> Vec<RawSet<'a>> {
    let mut sets = Vec::new();
    let mut position = offset;

    while position < buffer.len() {
        let key_width = key_length.value();
        if buffer.len() - position < key_width {
            log::debug!(
                "Stopped splitting at offset {}: {} byte(s) left, {}-byte key needed",
                position,
                buffer.len() - position,
                key_width
            );
            break;
        }
        let key = &buffer[position..position + key_width];

        let (declared, consumed) =
            match length_encoding.decode_length(&buffer[position + key_width..]) {
                Ok(decoded) => decoded,
                Err(e) => {
                    log::debug!("Stopped splitting at offset {}: {}", position, e);
                    break;
                }
            };

        let value_start = position + key_width + consumed;
        let available = buffer.len() - value_start;
        // Tolerate short values from truncated captures
        let taken = declared.min(available);
        let value = &buffer[value_start..value_start + taken];
        if taken < declared {
            log::debug!(
                "Value at offset {} declared {} byte(s), only {} present",
                value_start,
                declared,
                taken
            );
        }

        let end = value_start + taken;
        sets.push(RawSet { key, value, end });
        position = end;
    }

    sets
}
