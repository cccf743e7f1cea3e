/// Maximum number of bytes a u64 varint can occupy.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_LEN: usize = 10;

/// Largest payload the 10th byte may carry: 9 full groups hold 63 bits,
/// so only the lowest bit of the last group is still in range.
const LAST_GROUP_MAX: u8 = 0x01;

use crate::error::WireError;

/// Decode an unsigned LEB128 varint starting at `offset`.
///
/// # Returns
///
/// `(decoded_value, next_offset)` on success, where `next_offset` is the
/// index one past the last consumed byte.
///
/// # Wire format examples
///
/// | Bytes                | Value | next_offset |
/// |----------------------|-------|-------------|
/// | `[0x00]`             | 0     | 1           |
/// | `[0x7F]`             | 127   | 1           |
/// | `[0x96, 0x01]`       | 150   | 2           |
/// | `[0xAC, 0x02]`       | 300   | 2           |
/// | `[0x80, 0x80, 0x01]` | 16384 | 3           |
///
/// # Errors
///
/// - [`WireError::TruncatedInput`] if the buffer ends before a byte
///   without the continuation bit is read.
/// - [`WireError::VarintOverflow`] if the 10th byte still has the
///   continuation bit set, or carries more than the single bit that fits
///   in a `u64`.
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;

    for i in 0..MAX_VARINT_LEN {
        let pos = offset + i;
        let byte = *buf
            .get(pos)
            .ok_or(WireError::TruncatedInput { offset: buf.len() })?;

        if i == MAX_VARINT_LEN - 1 && (byte & 0x80 != 0 || byte > LAST_GROUP_MAX) {
            return Err(WireError::VarintOverflow { offset });
        }

        // Extract the 7 data bits and shift them into position
        result |= u64::from(byte & 0x7F) << (7 * i);

        // If MSB is clear, this is the last byte
        if byte & 0x80 == 0 {
            return Ok((result, pos + 1));
        }
    }

    // The final iteration either returns or reports overflow.
    Err(WireError::VarintOverflow { offset })
}
