use crate::error::WireError;
use crate::fixed::{decode_fixed32, decode_fixed64};
use crate::length_delimited::decode_length_delimited;
use crate::value::Value;
use crate::varint::decode_varint;

/// Field wire types.
///
/// Every field is encoded as a tag varint followed by a payload. The low
/// three bits of the tag select the wire type:
///
/// ```text
/// ┌──────┬─────────────────┬────────────────────────────────┐
/// │ Code │ Type            │ Payload format                 │
/// ├──────┼─────────────────┼────────────────────────────────┤
/// │ 0    │ Varint          │ Single varint value            │
/// │ 1    │ Fixed64         │ 8 bytes, little-endian         │
/// │ 2    │ LengthDelimited │ Varint length + raw bytes      │
/// │ 3, 4 │ (groups)        │ unsupported                    │
/// │ 5    │ Fixed32         │ 4 bytes, little-endian         │
/// │ 6, 7 │ (unassigned)    │ unsupported                    │
/// └──────┴─────────────────┴────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}

impl WireType {
    /// The 3-bit code used on the wire.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short lowercase name, as shown by the renderers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Varint => "varint",
            Self::Fixed64 => "fixed64",
            Self::LengthDelimited => "bytes",
            Self::Fixed32 => "fixed32",
        }
    }
}

/// Signature shared by every payload codec: read a value at `offset`,
/// return it with the offset just past it.
pub type DecodeFn = for<'a> fn(&'a [u8], usize) -> Result<(Value<'a>, usize), WireError>;

/// A registry entry: the wire type and the function that decodes it.
#[derive(Clone, Copy)]
pub struct Codec {
    pub wire_type: WireType,
    pub decode: DecodeFn,
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("wire_type", &self.wire_type)
            .finish_non_exhaustive()
    }
}

fn varint_value(buf: &[u8], offset: usize) -> Result<(Value<'_>, usize), WireError> {
    decode_varint(buf, offset).map(|(v, next)| (Value::Varint(v), next))
}

fn fixed64_value(buf: &[u8], offset: usize) -> Result<(Value<'_>, usize), WireError> {
    decode_fixed64(buf, offset).map(|(v, next)| (Value::Fixed64(v), next))
}

fn bytes_value(buf: &[u8], offset: usize) -> Result<(Value<'_>, usize), WireError> {
    decode_length_delimited(buf, offset).map(|(b, next)| (Value::Bytes(b), next))
}

fn fixed32_value(buf: &[u8], offset: usize) -> Result<(Value<'_>, usize), WireError> {
    decode_fixed32(buf, offset).map(|(v, next)| (Value::Fixed32(v), next))
}

/// Codec table indexed by wire-type code. Read-only, shared by all
/// decode passes.
static REGISTRY: [Option<Codec>; 8] = [
    Some(Codec {
        wire_type: WireType::Varint,
        decode: varint_value,
    }),
    Some(Codec {
        wire_type: WireType::Fixed64,
        decode: fixed64_value,
    }),
    Some(Codec {
        wire_type: WireType::LengthDelimited,
        decode: bytes_value,
    }),
    None,
    None,
    Some(Codec {
        wire_type: WireType::Fixed32,
        decode: fixed32_value,
    }),
    None,
    None,
];

/// Look up the codec for a raw wire-type code.
///
/// `tag_offset` is only used to locate the error.
///
/// # Errors
///
/// [`WireError::UnsupportedWireType`] for codes 3, 4 and anything ≥ 6.
pub fn resolve(code: u8, tag_offset: usize) -> Result<Codec, WireError> {
    REGISTRY
        .get(usize::from(code))
        .copied()
        .flatten()
        .ok_or(WireError::UnsupportedWireType {
            offset: tag_offset,
            wire_type: code,
        })
}
