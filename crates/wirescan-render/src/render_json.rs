use serde_json::{Map, Value as Json, json};
use wirescan_decoder::{DecodeError, DecodeResult, Field};
use wirescan_wire::Value;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::payload::{nested_fields, printable_str};

/// JSON renderer for machine consumption.
///
/// Output shape:
///
/// ```text
/// {
///   "fields": [
///     { "number": 1, "wire_type": "varint", "offset": 0, "value": 150 },
///     { "number": 2, "wire_type": "bytes",  "offset": 3,
///       "value": { "len": 2, "hex": "6869", "utf8": "hi" },
///       "nested": [ ... ]                     ← only when re-decoded
///     }
///   ],
///   "error": null | { "kind": "...", "offset": 4, "message": "..." }
/// }
/// ```
///
/// Bytes are never truncated here, and `preview_bytes` is ignored.
/// Unlike the text renderer, nested decoding is attempted for printable
/// payloads too, since both readings can be emitted side by side. Nesting
/// stops at [`MAX_NESTED_DEPTH`](crate::config::MAX_NESTED_DEPTH).
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render a decode result as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Json`] if serialization fails.
    pub fn render_all(result: &DecodeResult<'_>, config: &RenderConfig) -> Result<String, RenderError> {
        let doc = json!({
            "fields": Self::fields_json(result.fields(), config.effective_depth()),
            "error": result.error().map_or(Json::Null, error_json),
        });
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn fields_json(fields: &[Field<'_>], depth_left: usize) -> Json {
        Json::Array(
            fields
                .iter()
                .map(|field| Self::field_json(field, depth_left))
                .collect(),
        )
    }

    fn field_json(field: &Field<'_>, depth_left: usize) -> Json {
        let mut obj = Map::new();
        obj.insert("number".into(), json!(field.number));
        obj.insert("wire_type".into(), json!(field.wire_type.name()));
        obj.insert("offset".into(), json!(field.offset));

        match field.value {
            Value::Bytes(bytes) => {
                obj.insert(
                    "value".into(),
                    json!({
                        "len": bytes.len(),
                        "hex": hex::encode(bytes),
                        "utf8": printable_str(bytes),
                    }),
                );
                if let Some(nested) = nested_fields(bytes, depth_left) {
                    obj.insert("nested".into(), Self::fields_json(&nested, depth_left - 1));
                }
            }
            scalar => {
                obj.insert("value".into(), json!(scalar.as_u64()));
            }
        }

        Json::Object(obj)
    }
}

fn error_json(error: &DecodeError) -> Json {
    json!({
        "kind": error.kind().as_str(),
        "offset": error.offset(),
        "message": error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use wirescan_decoder::decode;

    use super::*;

    fn render(buf: &[u8], config: &RenderConfig) -> Json {
        let out = JsonRenderer::render_all(&decode(buf), config).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn complete_result() {
        let buf = [0x08, 0x96, 0x01, 0x12, 0x02, b'h', b'i'];
        let doc = render(&buf, &RenderConfig::default());
        assert_eq!(
            doc,
            json!({
                "fields": [
                    { "number": 1, "wire_type": "varint", "offset": 0, "value": 150 },
                    {
                        "number": 2, "wire_type": "bytes", "offset": 3,
                        "value": { "len": 2, "hex": "6869", "utf8": "hi" }
                    }
                ],
                "error": null
            })
        );
    }

    #[test]
    fn partial_result_reports_error() {
        let buf = [0x08, 0x01, 0x0B];
        let doc = render(&buf, &RenderConfig::default());
        assert_eq!(doc["fields"].as_array().map(Vec::len), Some(1));
        assert_eq!(
            doc["error"],
            json!({
                "kind": "unsupported_wire_type",
                "offset": 2,
                "message": "unsupported wire type 3 at offset 2"
            })
        );
    }

    #[test]
    fn nested_and_binary_bytes() {
        let buf = [0x0A, 0x02, 0x08, 0x07];
        let config = RenderConfig {
            nested_depth: 1,
            ..RenderConfig::default()
        };
        let doc = render(&buf, &config);
        let field = &doc["fields"][0];
        assert_eq!(field["value"]["utf8"], Json::Null);
        assert_eq!(field["value"]["hex"], "0807");
        assert_eq!(field["nested"][0]["value"], 7);
    }

    #[test]
    fn fixed_values_are_numbers() {
        let buf = [0x0D, 0xFF, 0xFF, 0xFF, 0xFF];
        let doc = render(&buf, &RenderConfig::default());
        assert_eq!(doc["fields"][0]["value"], json!(u32::MAX));
        assert_eq!(doc["fields"][0]["wire_type"], "fixed32");
    }
}
