//! Fixture builders shared by the integration tests and benches.
//!
//! The library crates only decode. Tests need well-formed payloads, so this
//! crate carries a small encoder that writes exactly the wire layout the
//! decoder expects.

use wirescan_wire::WireType;

/// Write `value` as a base-128 varint into `buf`, returning the number of
/// bytes written (1 to 10).
///
/// # Panics
///
/// Panics if `buf` is shorter than the encoding.
pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value > 0 {
            byte |= 0x80;
        }
        buf[i] = byte;
        i += 1;
        if value == 0 {
            return i;
        }
    }
}

/// Builder for tag-length-value payloads.
///
/// ```
/// use wirescan_tests::MessageBuilder;
///
/// let bytes = MessageBuilder::new().varint(1, 150).bytes(2, b"hi").build();
/// assert_eq!(bytes, [0x08, 0x96, 0x01, 0x12, 0x02, b'h', b'i']);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageBuilder {
    buf: Vec<u8>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn varint(mut self, number: u64, value: u64) -> Self {
        self.tag(number, WireType::Varint);
        self.push_varint(value);
        self
    }

    pub fn fixed64(mut self, number: u64, value: u64) -> Self {
        self.tag(number, WireType::Fixed64);
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn fixed32(mut self, number: u64, value: u32) -> Self {
        self.tag(number, WireType::Fixed32);
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(mut self, number: u64, data: &[u8]) -> Self {
        self.tag(number, WireType::LengthDelimited);
        self.push_varint(data.len() as u64);
        self.buf.extend_from_slice(data);
        self
    }

    /// Append raw bytes with no framing, for building malformed input.
    pub fn raw(mut self, data: &[u8]) -> Self {
        self.buf.extend_from_slice(data);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }

    fn tag(&mut self, number: u64, wire_type: WireType) {
        self.push_varint((number << 3) | u64::from(wire_type.code()));
    }

    fn push_varint(&mut self, value: u64) {
        let mut scratch = [0u8; 10];
        let n = encode_varint(value, &mut scratch);
        self.buf.extend_from_slice(&scratch[..n]);
    }
}
