use wirescan_wire::WireError;

/// Errors that stop a decode pass.
///
/// Codec failures arrive wrapped from `wirescan-wire`; the two variants
/// defined here come from checks only the field loop can make.
///
/// ```text
///   DecodeError
///   ├── InvalidFieldNumber   ← tag decoded to field number 0
///   ├── FieldLimitExceeded   ← DecoderConfig::max_fields reached
///   └── Wire(WireError)      ← truncation, overflow, wire type, length
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The tag's field number was not a positive integer.
    #[error("invalid field number {field_number} at offset {offset}")]
    InvalidFieldNumber { offset: usize, field_number: u64 },

    /// More fields than the configured limit.
    #[error("field limit of {limit} exceeded at offset {offset}")]
    FieldLimitExceeded { offset: usize, limit: usize },

    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Flat classification of a [`DecodeError`], for callers that only care
/// about the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TruncatedInput,
    VarintOverflow,
    UnsupportedWireType,
    InvalidFieldNumber,
    InvalidLength,
    FieldLimitExceeded,
}

impl ErrorKind {
    /// Stable snake_case name, used in JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TruncatedInput => "truncated_input",
            Self::VarintOverflow => "varint_overflow",
            Self::UnsupportedWireType => "unsupported_wire_type",
            Self::InvalidFieldNumber => "invalid_field_number",
            Self::InvalidLength => "invalid_length",
            Self::FieldLimitExceeded => "field_limit_exceeded",
        }
    }
}

impl DecodeError {
    /// Byte offset at which decoding stopped.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidFieldNumber { offset, .. } | Self::FieldLimitExceeded { offset, .. } => {
                *offset
            }
            Self::Wire(e) => e.offset(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFieldNumber { .. } => ErrorKind::InvalidFieldNumber,
            Self::FieldLimitExceeded { .. } => ErrorKind::FieldLimitExceeded,
            Self::Wire(WireError::TruncatedInput { .. }) => ErrorKind::TruncatedInput,
            Self::Wire(WireError::VarintOverflow { .. }) => ErrorKind::VarintOverflow,
            Self::Wire(WireError::UnsupportedWireType { .. }) => ErrorKind::UnsupportedWireType,
            Self::Wire(WireError::InvalidLength { .. }) => ErrorKind::InvalidLength,
        }
    }
}
