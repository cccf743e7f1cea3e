use wirescan_decoder::{DecodeResult, Field, decode};

/// Interpret `bytes` as display text, if it is UTF-8 with no control
/// characters other than newline, tab and carriage return.
pub(crate) fn printable_str(bytes: &[u8]) -> Option<&str> {
    let s = std::str::from_utf8(bytes).ok()?;
    s.chars()
        .all(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .then_some(s)
}

/// Re-run the decoder on a length-delimited payload.
///
/// Returns the fields only when `depth_left` allows another level and the
/// payload decodes completely into at least one field. Anything else is
/// left to be shown as raw bytes.
pub(crate) fn nested_fields(bytes: &[u8], depth_left: usize) -> Option<Vec<Field<'_>>> {
    if depth_left == 0 || bytes.is_empty() {
        return None;
    }
    match decode(bytes) {
        DecodeResult::Complete(fields) => Some(fields),
        DecodeResult::Partial { .. } => None,
    }
}

/// Two's-complement reading of a varint, when it differs from the
/// unsigned one. Negative `int64` values are sent as 10-byte varints.
pub(crate) fn signed_hint(value: u64) -> Option<i64> {
    i64::try_from(value)
        .is_err()
        .then(|| value.cast_signed())
}
