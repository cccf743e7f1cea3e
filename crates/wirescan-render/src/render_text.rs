use std::fmt::Write as _;

use wirescan_decoder::{DecodeResult, Field};
use wirescan_wire::Value;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::payload::{nested_fields, printable_str, signed_hint};

/// Text renderer: one line per field, nested messages indented by two
/// spaces per level.
///
/// Example output:
///
/// ```text
/// #1 varint 150
/// #2 fixed64 0x0000000000000001 (1)
/// #3 bytes "hi"
/// #4 bytes {
///   #1 varint 18446744073709551615 (i64 -1)
/// }
/// #5 fixed32 0x0000002a (42)
/// ! error: truncated input at offset 31
/// ```
///
/// Printable UTF-8 payloads are shown as quoted strings and never tried
/// as nested messages; short strings very often decode as valid fields.
pub struct TextRenderer;

impl TextRenderer {
    /// Render a decode result, including the trailing error line for a
    /// partial result.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Fmt`] if writing to the output buffer fails.
    pub fn render_all(result: &DecodeResult<'_>, config: &RenderConfig) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::render_fields(&mut out, result.fields(), config, 0)?;
        if let Some(error) = result.error() {
            writeln!(out, "! error: {error}")?;
        }
        Ok(out)
    }

    fn render_fields(
        out: &mut String,
        fields: &[Field<'_>],
        config: &RenderConfig,
        level: usize,
    ) -> Result<(), RenderError> {
        for field in fields {
            let indent = "  ".repeat(level);
            write!(out, "{indent}")?;
            if config.show_offsets {
                write!(out, "@{} ", field.offset)?;
            }
            write!(out, "#{} {} ", field.number, field.wire_type.name())?;

            match field.value {
                Value::Varint(v) => match signed_hint(v) {
                    Some(signed) => writeln!(out, "{v} (i64 {signed})")?,
                    None => writeln!(out, "{v}")?,
                },
                Value::Fixed64(v) => writeln!(out, "0x{v:016x} ({v})")?,
                Value::Fixed32(v) => writeln!(out, "0x{v:08x} ({v})")?,
                Value::Bytes(bytes) => {
                    if let Some(s) = printable_str(bytes) {
                        writeln!(out, "{}", preview_str(s, config.preview_bytes))?;
                    } else if let Some(nested) =
                        nested_fields(bytes, config.effective_depth().saturating_sub(level))
                    {
                        writeln!(out, "{{")?;
                        Self::render_fields(out, &nested, config, level + 1)?;
                        writeln!(out, "{indent}}}")?;
                    } else {
                        writeln!(out, "{}", preview_hex(bytes, config.preview_bytes))?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Debug-quoted string, cut to `limit` characters with a trailing `…`.
fn preview_str(s: &str, limit: usize) -> String {
    if s.chars().count() > limit {
        let cut: String = s.chars().take(limit).collect();
        format!("{cut:?}…")
    } else {
        format!("{s:?}")
    }
}

/// `[len bytes] hex`, with the hex cut to `limit` bytes.
fn preview_hex(bytes: &[u8], limit: usize) -> String {
    let shown = &bytes[..bytes.len().min(limit)];
    let ellipsis = if shown.len() < bytes.len() { "…" } else { "" };
    format!("[{} bytes] {}{ellipsis}", bytes.len(), hex::encode(shown))
}
