use std::iter::FusedIterator;

use tracing::{debug, trace};
use wirescan_wire::varint::decode_varint;
use wirescan_wire::wire_type;

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::field::Field;

/// Lazy field decoder over one in-memory buffer.
///
/// Each call to `next` reads one tag, resolves its wire type through the
/// codec registry, decodes the payload and advances the cursor:
///
/// ```text
///   cursor == len? ──yes──▶ done
///        │ no
///   read tag varint ─────── error ──▶ yield Err, done
///        │
///   number = tag >> 3 ───── 0 ──────▶ yield InvalidFieldNumber, done
///   wire   = tag & 7  ───── unknown ▶ yield UnsupportedWireType, done
///        │
///   codec(buf, after_tag) ─ error ──▶ yield Err, done
///        │
///   yield Field, cursor = next_offset
/// ```
///
/// The iterator is fused: after the first error, or once the buffer is
/// exhausted, it only returns `None`. It is bound to a single pass; to
/// decode again, build a new decoder.
///
/// # Example
///
/// ```rust
/// use wirescan_decoder::FieldDecoder;
/// use wirescan_wire::{Value, WireType};
///
/// let mut fields = FieldDecoder::new(&[0x08, 0x96, 0x01]);
/// let field = fields.next().unwrap().unwrap();
/// assert_eq!(field.number, 1);
/// assert_eq!(field.wire_type, WireType::Varint);
/// assert_eq!(field.value, Value::Varint(150));
/// assert!(fields.next().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct FieldDecoder<'a> {
    buf: &'a [u8],
    cursor: usize,
    emitted: usize,
    config: DecoderConfig,
    done: bool,
}

impl<'a> FieldDecoder<'a> {
    /// Create a decoder with the default configuration.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(buf: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            buf,
            cursor: 0,
            emitted: 0,
            config,
            done: false,
        }
    }

    /// Current read offset. Only ever grows.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Decode the field starting at the cursor without touching iterator
    /// state. Returns the field and the offset just past it.
    fn decode_field(&self) -> Result<(Field<'a>, usize), DecodeError> {
        let tag_offset = self.cursor;

        if let Some(limit) = self.config.max_fields
            && self.emitted >= limit
        {
            return Err(DecodeError::FieldLimitExceeded {
                offset: tag_offset,
                limit,
            });
        }

        let (tag, after_tag) = decode_varint(self.buf, tag_offset)?;

        let number = tag >> 3;
        // Masked to three bits, always fits.
        #[allow(clippy::cast_possible_truncation)]
        let code = (tag & 0x7) as u8;

        if number == 0 {
            return Err(DecodeError::InvalidFieldNumber {
                offset: tag_offset,
                field_number: number,
            });
        }

        let codec = wire_type::resolve(code, tag_offset)?;
        let (value, next) = (codec.decode)(self.buf, after_tag)?;

        Ok((
            Field {
                number,
                wire_type: codec.wire_type,
                value,
                offset: tag_offset,
            },
            next,
        ))
    }
}

impl<'a> Iterator for FieldDecoder<'a> {
    type Item = Result<Field<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor == self.buf.len() {
            self.done = true;
            return None;
        }

        match self.decode_field() {
            Ok((field, next)) => {
                trace!(
                    offset = field.offset,
                    number = field.number,
                    wire_type = field.wire_type.name(),
                    "decoded field"
                );
                self.cursor = next;
                self.emitted += 1;
                Some(Ok(field))
            }
            Err(e) => {
                debug!(offset = e.offset(), error = %e, "decode pass stopped");
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for FieldDecoder<'_> {}

/// Outcome of a complete decode pass.
///
/// Fields decoded before an error are never discarded: they are returned
/// in [`DecodeResult::Partial`] alongside the error, and the caller
/// decides whether to keep them. A `Partial` with no fields means the
/// very first field failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeResult<'a> {
    /// The buffer ended exactly on a field boundary.
    Complete(Vec<Field<'a>>),

    /// Decoding stopped at `error`.
    Partial {
        fields: Vec<Field<'a>>,
        error: DecodeError,
    },
}

impl<'a> DecodeResult<'a> {
    /// Every field decoded, whether or not the pass completed.
    #[must_use]
    pub fn fields(&self) -> &[Field<'a>] {
        match self {
            Self::Complete(fields) | Self::Partial { fields, .. } => fields,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            Self::Complete(_) => None,
            Self::Partial { error, .. } => Some(error),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Discard partial output and keep only the error.
    ///
    /// # Errors
    ///
    /// Returns the stored error for a `Partial` result.
    pub fn into_result(self) -> Result<Vec<Field<'a>>, DecodeError> {
        match self {
            Self::Complete(fields) => Ok(fields),
            Self::Partial { error, .. } => Err(error),
        }
    }
}

/// Decode every field in `buf` with the default configuration.
///
/// # Example
///
/// ```rust
/// use wirescan_decoder::decode;
///
/// let result = decode(&[0x08, 0x01]);
/// assert!(result.is_complete());
/// assert_eq!(result.fields().len(), 1);
/// ```
#[must_use]
pub fn decode(buf: &[u8]) -> DecodeResult<'_> {
    decode_with_config(buf, DecoderConfig::default())
}

/// Decode every field in `buf`, stopping at the first error.
#[must_use]
pub fn decode_with_config(buf: &[u8], config: DecoderConfig) -> DecodeResult<'_> {
    let mut fields = Vec::new();
    for item in FieldDecoder::with_config(buf, config) {
        match item {
            Ok(field) => fields.push(field),
            Err(error) => return DecodeResult::Partial { fields, error },
        }
    }
    DecodeResult::Complete(fields)
}
