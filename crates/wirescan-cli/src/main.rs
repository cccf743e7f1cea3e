/// wirescan command-line tool: decode and check schemaless
/// tag-length-value payloads.
///
/// # Command overview
///
/// ```text
/// wirescan <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print every decoded field (text or JSON)
///   validate   Check that a payload decodes cleanly to the end
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr (RUST_LOG overrides)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                          |
/// |------|--------------------------------------------------|
/// | 0    | Success, payload decoded completely              |
/// | 1    | Error (I/O failure, bad hex, partial decode)     |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_inspect;
mod cmd_validate;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The wirescan command-line tool.
///
/// Decodes protobuf-style wire payloads without a schema.
#[derive(Parser)]
#[command(name = "wirescan", version, about = "Schemaless wire-format decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug-level decoder logs on stderr).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print each decoded field of a payload.
    Inspect(InspectArgs),
    /// Check that a payload decodes without error.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Where the payload comes from. Shared by every sub-command.
///
/// ```text
/// ┌───────────────────┬──────────────────────────────────────────────┐
/// │ INPUT             │ Meaning                                      │
/// ├───────────────────┼──────────────────────────────────────────────┤
/// │ path/to/file.bin  │ Raw bytes read from the file                 │
/// │ -                 │ Raw bytes read from stdin                    │
/// │ "08 96 01" --hex  │ INPUT itself is hex; whitespace is ignored   │
/// └───────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InputArgs {
    /// File path, `-` for stdin, or a hex string with `--hex`.
    pub input: String,

    /// Treat INPUT as a hex string instead of a path.
    #[arg(long)]
    pub hex: bool,

    /// Stop with an error after this many fields.
    #[arg(long)]
    pub max_fields: Option<usize>,
}

/// Arguments for `wirescan inspect`.
///
/// Decodes the payload and prints every field. If decoding stops early the
/// fields read so far are still printed, followed by the error, and the
/// command exits with code 1.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────┐
/// │ Flag      │ Values / default                                     │
/// ├───────────┼──────────────────────────────────────────────────────┤
/// │ --mode    │ text (default) | json                                │
/// │ --depth   │ levels of bytes payloads shown as nested (0..=32)    │
/// │ --preview │ bytes shown per bytes value in text mode (32)        │
/// │ --offsets │ prefix text lines with the tag offset                │
/// └───────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Output format: `text` or `json`.
    #[arg(long, default_value = "text")]
    pub mode: String,

    /// Levels of length-delimited payloads to re-decode as nested messages
    /// (at most 32).
    #[arg(long, default_value_t = 0, value_parser = cmd_inspect::parse_depth)]
    pub depth: usize,

    /// Maximum bytes shown for a bytes value in text mode.
    #[arg(long, default_value_t = 32)]
    pub preview: usize,

    /// Show the tag offset of every field.
    #[arg(long)]
    pub offsets: bool,
}

/// Arguments for `wirescan validate`.
///
/// Decodes the payload and reports a single `✓` or `✗` line. Exits with
/// code 0 only when every byte was consumed without error.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: InputArgs,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}
