#![no_main]

use libfuzzer_sys::fuzz_target;
use wirescan_decoder::decode;
use wirescan_render::{DefaultRenderer, FieldRenderer, OutputMode, RenderConfig};

// Fuzz target: render arbitrary decode results in both modes.
//
// Input format:
//   byte 0: nested depth (low 2 bits, or unbounded when the top bit is
//           set), show_offsets (bit 2)
//   bytes 1..: payload
//
// Rendering must never fail or panic, and JSON output must parse back.
fuzz_target!(|data: &[u8]| {
    let Some((&depth, payload)) = data.split_first() else {
        return;
    };
    let result = decode(payload);

    for mode in [OutputMode::Text, OutputMode::Json] {
        let config = RenderConfig {
            mode,
            nested_depth: if depth & 0x80 != 0 {
                usize::MAX
            } else {
                usize::from(depth & 0x03)
            },
            show_offsets: depth & 0x04 != 0,
            ..RenderConfig::default()
        };
        let out = DefaultRenderer.render(&result, &config).unwrap();
        if mode == OutputMode::Json {
            serde_json::from_str::<serde_json::Value>(&out).unwrap();
        }
    }
});
