//! Integration test: raw bytes → decode → render
//!
//! Runs the decoder over hand-built payloads and checks the rendered
//! output of both modes, including nested payloads at several depths.

use wirescan_decoder::{DecoderConfig, decode, decode_with_config};
use wirescan_render::{DefaultRenderer, FieldRenderer, MAX_NESTED_DEPTH, OutputMode, RenderConfig};
use wirescan_tests::encode_varint;

/// `#3 bytes { #2 bytes { #1 varint 2 } }`
const TWO_LEVELS: [u8; 6] = [0x1A, 0x04, 0x12, 0x02, 0x08, 0x02];

/// `levels` copies of field 2 (bytes) wrapped around `#2 varint 1`.
///
/// Built inside out: each layer's header depends on the length of
/// everything it wraps.
fn nested_chain(levels: usize) -> Vec<u8> {
    let core = [0x10, 0x01];
    let mut headers = Vec::with_capacity(levels);
    let mut len = core.len();
    for _ in 0..levels {
        let mut header = vec![0x12];
        let mut prefix = [0u8; 10];
        let n = encode_varint(len as u64, &mut prefix);
        header.extend_from_slice(&prefix[..n]);
        len += header.len();
        headers.push(header);
    }

    let mut buf = Vec::with_capacity(len);
    for header in headers.iter().rev() {
        buf.extend_from_slice(header);
    }
    buf.extend_from_slice(&core);
    buf
}

fn text(buf: &[u8], nested_depth: usize) -> String {
    let config = RenderConfig {
        nested_depth,
        ..RenderConfig::default()
    };
    DefaultRenderer
        .render(&decode(buf), &config)
        .expect("text render should succeed")
}

#[test]
fn nested_depth_controls_expansion() {
    assert_eq!(text(&TWO_LEVELS, 0), "#3 bytes [4 bytes] 12020802\n");
    assert_eq!(
        text(&TWO_LEVELS, 1),
        "#3 bytes {\n  #2 bytes [2 bytes] 0802\n}\n"
    );
    assert_eq!(
        text(&TWO_LEVELS, 2),
        "#3 bytes {\n  #2 bytes {\n    #1 varint 2\n  }\n}\n"
    );
    // Extra depth beyond what the payload holds changes nothing.
    assert_eq!(text(&TWO_LEVELS, 5), text(&TWO_LEVELS, 2));
}

#[test]
fn json_nested_respects_depth() {
    let config = RenderConfig {
        mode: OutputMode::Json,
        nested_depth: 1,
        ..RenderConfig::default()
    };
    let out = DefaultRenderer
        .render(&decode(&TWO_LEVELS), &config)
        .expect("JSON render should succeed");
    let doc: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");

    let outer = &doc["fields"][0];
    assert_eq!(outer["number"], 3);
    let middle = &outer["nested"][0];
    assert_eq!(middle["number"], 2);
    assert_eq!(middle["value"]["hex"], "0802");
    assert!(middle.get("nested").is_none());
}

#[test]
fn partial_result_renders_fields_then_error() {
    // field 1 varint 1, then field 2 claims 5 bytes but only 1 remains
    let buf = [0x08, 0x01, 0x12, 0x05, 0xAA];
    let out = text(&buf, 0);
    assert_eq!(
        out,
        "#1 varint 1\n! error: invalid length 5 at offset 3: only 1 bytes remain\n"
    );
}

#[test]
fn field_limit_surfaces_as_error() {
    let buf = [0x08, 0x01, 0x10, 0x02, 0x18, 0x03];
    let result = decode_with_config(&buf, DecoderConfig::with_max_fields(2));
    let config = RenderConfig {
        mode: OutputMode::Json,
        ..RenderConfig::default()
    };
    let out = DefaultRenderer.render(&result, &config).expect("render");
    let doc: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(doc["fields"].as_array().map(Vec::len), Some(2));
    assert_eq!(doc["error"]["kind"], "field_limit_exceeded");
    assert_eq!(doc["error"]["offset"], 4);
}

#[test]
fn deep_nesting_is_capped() {
    let buf = nested_chain(20_000);
    let result = decode(&buf);
    assert!(result.is_complete());

    let text_config = RenderConfig {
        nested_depth: usize::MAX,
        ..RenderConfig::default()
    };
    let out = DefaultRenderer
        .render(&result, &text_config)
        .expect("text render should succeed");
    assert!(out.starts_with("#2 bytes {\n"));
    assert_eq!(out.matches('{').count(), MAX_NESTED_DEPTH);
    assert_eq!(out.matches('}').count(), MAX_NESTED_DEPTH);
    // the first level past the cap falls back to a hex preview
    let indent = "  ".repeat(MAX_NESTED_DEPTH);
    assert!(out.contains(&format!("\n{indent}#2 bytes [")));

    let json_config = RenderConfig {
        mode: OutputMode::Json,
        ..text_config
    };
    let out = DefaultRenderer
        .render(&result, &json_config)
        .expect("JSON render should succeed");
    assert_eq!(out.matches("\"nested\"").count(), MAX_NESTED_DEPTH);
    serde_json::from_str::<serde_json::Value>(&out).expect("valid JSON");
}
