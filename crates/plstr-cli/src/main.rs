//! plstr - Command-line front end for the byte-string operations.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plstr")]
#[command(version)]
#[command(about = "Byte-string utilities modeled on scripting-language string methods", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print non-printable bytes as ASCII escapes
    #[arg(long, global = true)]
    escape: bool,
}

/// Every SOURCE argument may be `-` to read the bytes from stdin.
#[derive(Subcommand)]
enum Commands {
    /// Copy a string, optionally into a fixed-size buffer
    Copy {
        source: String,
        /// Size of the destination buffer
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Extract the bytes between OFFSET and LIMIT (negative counts from the end)
    Slice {
        source: String,
        #[arg(allow_negative_numbers = true)]
        offset: isize,
        #[arg(allow_negative_numbers = true)]
        limit: isize,
    },
    /// Concatenate two strings
    Cat { destination: String, source: String },
    /// Split on every occurrence of DELIMITER
    Split { source: String, delimiter: String },
    /// Split on every line feed and carriage return
    Splitlines {
        source: String,
        /// Keep the line terminators
        #[arg(long)]
        keepends: bool,
    },
    /// Test whether SOURCE starts with PREFIX
    Startswith { source: String, prefix: String },
    /// Test whether SOURCE ends with SUFFIX
    Endswith { source: String, suffix: String },
    /// Strip bytes from the ends of a string
    Strip {
        source: String,
        /// Bytes to strip (default: whitespace)
        #[arg(long)]
        chars: Option<String>,
        /// Strip only the start
        #[arg(long, conflicts_with = "right")]
        left: bool,
        /// Strip only the end
        #[arg(long)]
        right: bool,
    },
    /// Delete DELETECHARS, or map TABLE onto DELETECHARS
    Translate {
        source: String,
        deletechars: String,
        #[arg(long)]
        table: Option<String>,
    },
    /// Count non-overlapping occurrences of NEEDLE
    Count { source: String, needle: String },
    /// Replace tabs with spaces
    Expandtabs {
        source: String,
        #[arg(long, env = "PLSTR_TABSIZE", default_value_t = 8, allow_negative_numbers = true)]
        tabsize: isize,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();

    if let Err(err) = commands::run(cli.command, cli.escape) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
