use crate::error::WireError;
use crate::varint::decode_varint;

/// Read a length-prefixed byte payload starting at `offset`.
///
/// Wire layout:
/// ```text
///   length (varint) │ data [length]
/// ```
///
/// The returned slice borrows directly from `buf`; nothing is copied and
/// the bytes are not interpreted. Whether they hold a string, a nested
/// message or packed values is up to the caller.
///
/// # Returns
///
/// `(data, next_offset)` where `next_offset` is one past the last data
/// byte.
///
/// # Errors
///
/// - Any [`WireError`] from reading the length varint.
/// - [`WireError::InvalidLength`] if the declared length exceeds the
///   bytes remaining after the prefix. The offset is the start of the
///   prefix.
pub fn decode_length_delimited(buf: &[u8], offset: usize) -> Result<(&[u8], usize), WireError> {
    let (length, start) = decode_varint(buf, offset)?;
    let available = buf.len() - start;

    let invalid = WireError::InvalidLength {
        offset,
        length,
        available,
    };

    let len = usize::try_from(length).map_err(|_| invalid.clone())?;
    let end = start.checked_add(len).ok_or_else(|| invalid.clone())?;
    let data = buf.get(start..end).ok_or(invalid)?;

    Ok((data, end))
}
