/// Implementation of `wirescan validate`.
///
/// Runs one decode pass over the whole payload and prints a single line.
///
/// # Success output
///
/// ```text
/// ✓ 3 fields decoded (17 bytes)
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unsupported wire type 3 at offset 2 (after 1 field)
/// ```
///
/// Failure returns `Err`, which `main` turns into exit code 1.
use anyhow::{Result, anyhow};
use wirescan_decoder::{DecodeResult, decode_with_config};

use crate::ValidateArgs;
use crate::input::{decoder_config, read_payload};

/// Run the `wirescan validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the payload does not
/// decode completely.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = read_payload(&args.source)?;
    let result = decode_with_config(&bytes, decoder_config(&args.source));

    let (line, ok) = report(&result, bytes.len());
    println!("{line}");
    if ok {
        Ok(())
    } else {
        Err(anyhow!("validation failed"))
    }
}

/// The report line for a decode pass, and whether it passed.
fn report(result: &DecodeResult<'_>, len: usize) -> (String, bool) {
    let count = result.fields().len();
    match result.error() {
        None => (
            format!("✓ {count} field{} decoded ({len} bytes)", plural(count)),
            true,
        ),
        Some(error) => (
            format!("✗ Error: {error} (after {count} field{})", plural(count)),
            false,
        ),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
