//! Reading the payload named on the command line.

use std::fs;
use std::io::{self, Read as _};

use anyhow::{Context, Result};
use tracing::debug;
use wirescan_decoder::DecoderConfig;

use crate::InputArgs;

/// Load the raw payload bytes described by `args`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read, or if `--hex`
/// was given and INPUT is not valid hex.
pub fn read_payload(args: &InputArgs) -> Result<Vec<u8>> {
    let bytes = if args.hex {
        let digits: String = args.input.split_whitespace().collect();
        hex::decode(&digits).context("invalid hex input")?
    } else if args.input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        buf
    } else {
        fs::read(&args.input).with_context(|| format!("cannot read {}", args.input))?
    };

    debug!(len = bytes.len(), "payload loaded");
    Ok(bytes)
}

/// Decoder settings derived from the shared input flags.
pub fn decoder_config(args: &InputArgs) -> DecoderConfig {
    DecoderConfig {
        max_fields: args.max_fields,
    }
}
