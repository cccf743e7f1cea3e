#![no_main]

use libfuzzer_sys::fuzz_target;
use wirescan_wire::varint::{decode_varint, MAX_VARINT_LEN};
use wirescan_wire::WireError;

// Fuzz target: decode_varint on arbitrary bytes.
//
// Checks:
// - never panics
// - a success consumes 1..=10 bytes
// - a truncation always points at the buffer end
fuzz_target!(|data: &[u8]| {
    match decode_varint(data, 0) {
        Ok((_, next)) => assert!((1..=MAX_VARINT_LEN).contains(&next)),
        Err(WireError::TruncatedInput { offset }) => assert_eq!(offset, data.len()),
        Err(e) => assert_eq!(e.offset(), 0),
    }
});
