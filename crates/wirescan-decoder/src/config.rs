/// Configuration for a decode pass.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                              │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ max_fields │ Stop with FieldLimitExceeded after this many fields  │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// The per-field cost is already bounded by the 10-byte varint cap, so
/// the default places no limit on the field count. Set `max_fields` when
/// decoding untrusted input into memory with [`decode_with_config`].
///
/// [`decode_with_config`]: crate::decode_with_config
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum number of fields a single pass may yield.
    pub max_fields: Option<usize>,
}

impl DecoderConfig {
    /// Config with a field-count limit.
    #[must_use]
    pub fn with_max_fields(limit: usize) -> Self {
        Self {
            max_fields: Some(limit),
        }
    }
}
