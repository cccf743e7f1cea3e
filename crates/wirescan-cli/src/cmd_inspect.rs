/// Implementation of `wirescan inspect`.
///
/// Decodes the payload once and renders the result with
/// [`DefaultRenderer`]. The text output looks like:
///
/// ```text
/// #1 varint 150
/// #2 bytes "hello"
/// #3 fixed32 0x0000002a (42)
/// ! error: truncated input at offset 17
/// ```
///
/// The trailing `!` line only appears when decoding stopped early; in that
/// case the command still prints every field it got, then fails.
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use wirescan_decoder::decode_with_config;
use wirescan_render::{DefaultRenderer, FieldRenderer, MAX_NESTED_DEPTH, OutputMode, RenderConfig};

use crate::InspectArgs;
use crate::input::{decoder_config, read_payload};

/// Run the `wirescan inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a flag value is
/// unrecognised, rendering fails, or the payload did not decode
/// completely.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = read_payload(&args.source)?;

    let config = RenderConfig {
        mode: parse_output_mode(&args.mode)?,
        nested_depth: args.depth,
        preview_bytes: args.preview,
        show_offsets: args.offsets,
    };

    let result = decode_with_config(&bytes, decoder_config(&args.source));
    let rendered = DefaultRenderer
        .render(&result, &config)
        .context("render failed")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .context("cannot write to stdout")?;
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        handle.write_all(b"\n").context("cannot write to stdout")?;
    }

    match result.error() {
        Some(error) => Err(anyhow!("decoding stopped at offset {}", error.offset())),
        None => Ok(()),
    }
}

/// Parses the `--mode` string to an [`OutputMode`].
///
/// # Errors
///
/// Returns an error for unrecognised mode names.
fn parse_output_mode(s: &str) -> Result<OutputMode> {
    match s.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputMode::Text),
        "json" => Ok(OutputMode::Json),
        _ => Err(anyhow!("unknown mode {s:?}, expected text|json")),
    }
}

/// Parses `--depth`, rejecting values above [`MAX_NESTED_DEPTH`].
///
/// # Errors
///
/// Returns a message for clap to print when the value is not a number or
/// is out of range.
pub fn parse_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s.parse().map_err(|_| format!("{s:?} is not a depth"))?;
    if depth > MAX_NESTED_DEPTH {
        return Err(format!("depth must be at most {MAX_NESTED_DEPTH}"));
    }
    Ok(depth)
}
