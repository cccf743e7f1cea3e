#![no_main]

use libfuzzer_sys::fuzz_target;
use wirescan_decoder::{decode, FieldDecoder};

// Fuzz target: full decode pass over arbitrary bytes.
//
// Checks:
// - never panics
// - field offsets strictly increase and stay inside the buffer
// - the cursor never passes the buffer end
// - two passes agree
fuzz_target!(|data: &[u8]| {
    let result = decode(data);

    let mut last = None;
    for field in result.fields() {
        assert!(field.number >= 1);
        assert!(field.offset < data.len());
        if let Some(prev) = last {
            assert!(field.offset > prev);
        }
        last = Some(field.offset);
    }
    if let Some(error) = result.error() {
        assert!(error.offset() <= data.len());
    }

    let mut decoder = FieldDecoder::new(data);
    while decoder.next().is_some() {
        assert!(decoder.position() <= data.len());
    }

    assert_eq!(result, decode(data));
});
