use crate::error::WireError;

/// Width of a fixed-size little-endian payload.
///
/// Wire type 5 carries four bytes, wire type 1 carries eight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedWidth {
    Four = 4,
    Eight = 8,
}

impl FixedWidth {
    /// Number of bytes this width occupies on the wire.
    #[must_use]
    pub fn byte_len(self) -> usize {
        self as usize
    }
}

/// Decode a little-endian unsigned integer of `width` bytes at `offset`.
///
/// Bytes are read from `offset`, `offset + 1`, ..., `offset + width - 1`,
/// each exactly once, with byte 0 supplying the least-significant 8 bits.
///
/// # Returns
///
/// `(value, offset + width)` on success. A four-byte value always fits in
/// the low 32 bits of the returned `u64`.
///
/// # Errors
///
/// [`WireError::TruncatedInput`] if fewer than `width` bytes remain.
pub fn decode_fixed(buf: &[u8], offset: usize, width: FixedWidth) -> Result<(u64, usize), WireError> {
    let end = offset
        .checked_add(width.byte_len())
        .ok_or(WireError::TruncatedInput { offset: buf.len() })?;
    let bytes = buf
        .get(offset..end)
        .ok_or(WireError::TruncatedInput { offset: buf.len() })?;

    let value = bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | u64::from(b) << (8 * i));

    Ok((value, end))
}

/// Decode a 4-byte little-endian value (wire type 5).
///
/// # Errors
///
/// [`WireError::TruncatedInput`] if fewer than 4 bytes remain.
pub fn decode_fixed32(buf: &[u8], offset: usize) -> Result<(u32, usize), WireError> {
    let (value, next) = decode_fixed(buf, offset, FixedWidth::Four)?;
    // Four bytes never exceed u32::MAX.
    #[allow(clippy::cast_possible_truncation)]
    Ok((value as u32, next))
}

/// Decode an 8-byte little-endian value (wire type 1).
///
/// # Errors
///
/// [`WireError::TruncatedInput`] if fewer than 8 bytes remain.
pub fn decode_fixed64(buf: &[u8], offset: usize) -> Result<(u64, usize), WireError> {
    decode_fixed(buf, offset, FixedWidth::Eight)
}
