#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wirescan_decoder::decode;
use wirescan_tests::MessageBuilder;
use wirescan_wire::Value;

// Fuzz target: well-formed messages built from structured input.
//
// Every generated field is encoded with MessageBuilder, then the whole
// message is decoded. The decoder must return exactly the fields that
// went in, in order, with a complete result.

#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    Bytes(Vec<u8>),
}

#[derive(Arbitrary, Debug)]
struct FuzzField {
    number: u64,
    value: FuzzValue,
}

fuzz_target!(|input: Vec<FuzzField>| {
    // field numbers must be non-zero and fit beside the 3 wire-type bits
    let fields: Vec<(u64, FuzzValue)> = input
        .into_iter()
        .map(|f| ((f.number >> 3).max(1), f.value))
        .collect();

    let buf = fields
        .iter()
        .fold(MessageBuilder::new(), |b, (number, value)| match value {
            FuzzValue::Varint(v) => b.varint(*number, *v),
            FuzzValue::Fixed64(v) => b.fixed64(*number, *v),
            FuzzValue::Fixed32(v) => b.fixed32(*number, *v),
            FuzzValue::Bytes(v) => b.bytes(*number, v),
        })
        .build();

    let decoded = decode(&buf).into_result().unwrap();
    assert_eq!(decoded.len(), fields.len());

    for (field, (number, value)) in decoded.iter().zip(&fields) {
        assert_eq!(field.number, *number);
        let expected = match value {
            FuzzValue::Varint(v) => Value::Varint(*v),
            FuzzValue::Fixed64(v) => Value::Fixed64(*v),
            FuzzValue::Fixed32(v) => Value::Fixed32(*v),
            FuzzValue::Bytes(v) => Value::Bytes(v),
        };
        assert_eq!(field.value, expected);
    }
});
