/// Configuration for rendering decoded fields.
///
/// ```text
/// ┌───────────────┬────────────────────────────────────────────────────┐
/// │ Field         │ Purpose                                            │
/// ├───────────────┼────────────────────────────────────────────────────┤
/// │ mode          │ Selects Text or Json output                        │
/// │ nested_depth  │ Levels of bytes payloads re-decoded as messages    │
/// │ preview_bytes │ Max bytes shown for a bytes value (text mode)      │
/// │ show_offsets  │ Prefix each text line with the field's tag offset  │
/// └───────────────┴────────────────────────────────────────────────────┘
/// ```
///
/// With `nested_depth` at 0 (the default) every length-delimited payload
/// is shown as opaque bytes. Each extra level lets the renderer run the
/// decoder again on a payload; the payload is shown as a nested message
/// only when that second pass consumes it completely and yields at least
/// one field. Values above [`MAX_NESTED_DEPTH`] are clamped to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
    pub nested_depth: usize,
    pub preview_bytes: usize,
    pub show_offsets: bool,
}

/// Hard ceiling on nested rendering, whatever `nested_depth` asks for.
///
/// Each level costs a stack frame in the renderers. Deeper payloads are
/// shown as raw bytes at this level.
pub const MAX_NESTED_DEPTH: usize = 32;

impl RenderConfig {
    /// `nested_depth` clamped to [`MAX_NESTED_DEPTH`].
    #[must_use]
    pub fn effective_depth(&self) -> usize {
        self.nested_depth.min(MAX_NESTED_DEPTH)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Text,
            nested_depth: 0,
            preview_bytes: 32,
            show_offsets: false,
        }
    }
}

/// Output formats.
///
/// ```text
/// ┌──────┬──────────────────────────────────────────────────────────┐
/// │ Mode │ Example                                                  │
/// ├──────┼──────────────────────────────────────────────────────────┤
/// │ Text │ #1 varint 150                                            │
/// │ Json │ {"fields":[{"number":1,"wire_type":"varint",...}],...}   │
/// └──────┴──────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_clamped() {
        let config = RenderConfig {
            nested_depth: usize::MAX,
            ..RenderConfig::default()
        };
        assert_eq!(config.effective_depth(), MAX_NESTED_DEPTH);
        assert_eq!(RenderConfig::default().effective_depth(), 0);
    }
}
