use wirescan_decoder::DecodeResult;

use crate::config::{OutputMode, RenderConfig};
use crate::error::RenderError;
use crate::render_json::JsonRenderer;
use crate::render_text::TextRenderer;

/// Core renderer interface: turns a decode pass into display output.
///
/// Implementations are stateless. Everything that varies between calls
/// comes through [`RenderConfig`].
///
/// ```text
/// DecodeResult ──▶ FieldRenderer::render() ──▶ String
///                          │
///                    RenderConfig
///                    (mode, nested_depth, preview_bytes, show_offsets)
/// ```
pub trait FieldRenderer {
    /// Render every field of `result`, plus its error if the pass stopped
    /// early.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the output could not be produced.
    fn render(&self, result: &DecodeResult<'_>, config: &RenderConfig) -> Result<String, RenderError>;
}

/// Default renderer that dispatches on `config.mode`.
///
/// ```text
/// ┌──────────────┐     ┌──────────┐     ┌──────────────┐
/// │ DecodeResult │────▶│ dispatch │────▶│ TextRenderer │
/// │              │     │          │     │ JsonRenderer │
/// └──────────────┘     └──────────┘     └──────────────┘
/// ```
///
/// An empty result is not an error: empty input decodes to zero fields,
/// which renders as an empty string in text mode and an empty `fields`
/// array in JSON mode.
pub struct DefaultRenderer;

impl FieldRenderer for DefaultRenderer {
    fn render(&self, result: &DecodeResult<'_>, config: &RenderConfig) -> Result<String, RenderError> {
        match config.mode {
            OutputMode::Text => TextRenderer::render_all(result, config),
            OutputMode::Json => JsonRenderer::render_all(result, config),
        }
    }
}
