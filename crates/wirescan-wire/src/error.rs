/// Errors produced by the low-level codecs.
///
/// Every variant carries the byte offset at which the problem was
/// detected, measured from the start of the buffer handed to the codec.
/// This is critical when debugging binary payloads.
///
/// ```text
/// ┌─────────────────────┬──────────────────────────────────────────────┐
/// │ Variant             │ Offset points at                             │
/// ├─────────────────────┼──────────────────────────────────────────────┤
/// │ TruncatedInput      │ first missing byte (always buf.len())        │
/// │ VarintOverflow      │ first byte of the offending varint           │
/// │ UnsupportedWireType │ first byte of the field tag                  │
/// │ InvalidLength       │ first byte of the length prefix              │
/// └─────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The buffer ended before a required byte could be read.
    #[error("truncated input at offset {offset}")]
    TruncatedInput { offset: usize },

    /// A varint used more than 10 bytes or more than 64 significant bits.
    #[error("varint overflow at offset {offset}: exceeds 64 bits")]
    VarintOverflow { offset: usize },

    /// A tag carried a wire type outside {0, 1, 2, 5}.
    ///
    /// Codes 3 and 4 are the legacy group markers; 6 and 7 are unassigned.
    #[error("unsupported wire type {wire_type} at offset {offset}")]
    UnsupportedWireType { offset: usize, wire_type: u8 },

    /// A length prefix declared more bytes than remain in the buffer.
    #[error("invalid length {length} at offset {offset}: only {available} bytes remain")]
    InvalidLength {
        offset: usize,
        length: u64,
        available: usize,
    },
}

impl WireError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::TruncatedInput { offset }
            | Self::VarintOverflow { offset }
            | Self::UnsupportedWireType { offset, .. }
            | Self::InvalidLength { offset, .. } => offset,
        }
    }
}
