//! Codec-level integration tests for `wirescan-wire`.
//!
//! Each codec is a pure function over `(buffer, offset)`. These tests pin
//! down the values, the returned next offsets and the offsets carried by
//! every error variant.

use wirescan_tests::encode_varint;
use wirescan_wire::fixed::{decode_fixed32, decode_fixed64};
use wirescan_wire::length_delimited::decode_length_delimited;
use wirescan_wire::varint::{MAX_VARINT_LEN, decode_varint};
use wirescan_wire::wire_type::resolve;
use wirescan_wire::{Value, WireError, WireType};

// ── Varint ────────────────────────────────────────────────────────────────────

#[test]
fn every_single_byte_varint() {
    for v in 0u8..128 {
        assert_eq!(decode_varint(&[v], 0), Ok((u64::from(v), 1)), "byte {v:#04x}");
    }
}

#[test]
fn two_byte_varint_150() {
    assert_eq!(decode_varint(&[0x96, 0x01], 0), Ok((150, 2)));
}

#[test]
fn truncated_varint_reports_buffer_end() {
    assert_eq!(
        decode_varint(&[0x96], 0),
        Err(WireError::TruncatedInput { offset: 1 })
    );
    assert_eq!(
        decode_varint(&[0x08, 0xFF, 0xFF], 1),
        Err(WireError::TruncatedInput { offset: 3 })
    );
}

#[test]
fn ten_byte_varint_reaches_u64_max() {
    let mut buf = vec![0xFF; MAX_VARINT_LEN - 1];
    buf.push(0x01);
    assert_eq!(decode_varint(&buf, 0), Ok((u64::MAX, MAX_VARINT_LEN)));
}

#[test]
fn oversized_varints_overflow_at_their_start() {
    // 10th byte carries bits past 64
    let mut too_wide = vec![0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
    too_wide.push(0x02);
    assert_eq!(
        decode_varint(&too_wide, 1),
        Err(WireError::VarintOverflow { offset: 1 })
    );

    // 10th byte asks for an 11th
    let mut continued = vec![0x80; 9];
    continued.extend_from_slice(&[0x81, 0x00]);
    assert_eq!(
        decode_varint(&continued, 0),
        Err(WireError::VarintOverflow { offset: 0 })
    );

    // eleven continuation bytes
    let eleven = [0x80; 11];
    assert_eq!(
        decode_varint(&eleven, 0),
        Err(WireError::VarintOverflow { offset: 0 })
    );
}

#[test]
fn encoded_varints_decode_back() {
    let samples = [
        0,
        1,
        127,
        128,
        300,
        16_383,
        16_384,
        u64::from(u32::MAX),
        1 << 56,
        i64::MAX as u64,
        u64::MAX,
    ];
    for v in samples {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let n = encode_varint(v, &mut buf);
        assert_eq!(decode_varint(&buf[..n], 0), Ok((v, n)), "value {v}");
    }
}

// ── Fixed width ───────────────────────────────────────────────────────────────

#[test]
fn fixed32_is_little_endian() {
    assert_eq!(decode_fixed32(&[1, 0, 0, 0], 0), Ok((1, 4)));
    assert_eq!(decode_fixed32(&[0x78, 0x56, 0x34, 0x12], 0), Ok((0x1234_5678, 4)));
}

#[test]
fn fixed64_at_offset() {
    let mut buf = vec![0xAA, 0xBB];
    buf.extend_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
    assert_eq!(decode_fixed64(&buf, 2), Ok((0x0102_0304_0506_0708, 10)));
}

#[test]
fn fixed_truncation() {
    assert_eq!(
        decode_fixed32(&[1, 2, 3], 0),
        Err(WireError::TruncatedInput { offset: 3 })
    );
    assert_eq!(
        decode_fixed64(&[0; 7], 0),
        Err(WireError::TruncatedInput { offset: 7 })
    );
}

// ── Length-delimited ──────────────────────────────────────────────────────────

#[test]
fn length_delimited_hi() {
    assert_eq!(
        decode_length_delimited(&[0x02, b'h', b'i'], 0),
        Ok((&b"hi"[..], 3))
    );
}

#[test]
fn length_delimited_borrows_from_input() {
    let buf = [0x03, 1, 2, 3];
    let (data, _) = decode_length_delimited(&buf, 0).unwrap();
    assert!(std::ptr::eq(data.as_ptr(), buf[1..].as_ptr()));
}

#[test]
fn length_past_end_is_invalid() {
    assert_eq!(
        decode_length_delimited(&[0xFF, 0x05, 0x01], 1),
        Err(WireError::InvalidLength {
            offset: 1,
            length: 5,
            available: 1,
        })
    );
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[test]
fn registry_covers_supported_codes_only() {
    for (code, expected) in [
        (0, WireType::Varint),
        (1, WireType::Fixed64),
        (2, WireType::LengthDelimited),
        (5, WireType::Fixed32),
    ] {
        let codec = resolve(code, 0).unwrap();
        assert_eq!(codec.wire_type, expected);
        assert_eq!(expected.code(), code);
    }

    for code in [3, 4, 6, 7] {
        assert_eq!(
            resolve(code, 9).map(|c| c.wire_type),
            Err(WireError::UnsupportedWireType {
                offset: 9,
                wire_type: code,
            })
        );
    }
}

#[test]
fn registry_codecs_produce_matching_values() {
    let codec = resolve(2, 0).unwrap();
    let (value, next) = (codec.decode)(&[0x02, b'o', b'k'], 0).unwrap();
    assert_eq!(value, Value::Bytes(b"ok"));
    assert_eq!(value.wire_type(), WireType::LengthDelimited);
    assert_eq!(next, 3);
}
