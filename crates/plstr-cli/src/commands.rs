//! Subcommand execution and output formatting.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::Commands;

/// What a subcommand produced.
#[derive(Debug, PartialEq)]
enum Output {
    Bytes(Vec<u8>),
    Lines(Vec<Vec<u8>>),
    Flag(bool),
    Count(usize),
}

/// Resolves a SOURCE argument; `-` reads all of stdin.
fn input(arg: &str) -> Result<Vec<u8>> {
    if arg == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        debug!("read {} bytes from stdin", buf.len());
        return Ok(buf);
    }
    Ok(arg.as_bytes().to_vec())
}

fn execute(command: Commands) -> Result<Output> {
    let output = match command {
        Commands::Copy { source, capacity } => {
            let source = input(&source)?;
            match capacity {
                Some(capacity) => {
                    let mut buf = vec![0u8; capacity];
                    let written = plstr::copy_into(&source, &mut buf)
                        .with_context(|| format!("copy into a {capacity}-byte buffer failed"))?;
                    Output::Bytes(written.to_vec())
                }
                None => Output::Bytes(plstr::copy(&source).context("copy failed")?),
            }
        }
        Commands::Slice {
            source,
            offset,
            limit,
        } => {
            let source = input(&source)?;
            Output::Bytes(
                plstr::slice(&source, offset, limit)
                    .with_context(|| format!("slice {offset}..{limit} failed"))?,
            )
        }
        Commands::Cat {
            destination,
            source,
        } => {
            let destination = input(&destination)?;
            let source = input(&source)?;
            Output::Bytes(plstr::concat(&destination, &source).context("cat failed")?)
        }
        Commands::Split { source, delimiter } => {
            let source = input(&source)?;
            Output::Lines(plstr::split(&source, delimiter.as_bytes()).context("split failed")?)
        }
        Commands::Splitlines { source, keepends } => {
            let source = input(&source)?;
            Output::Lines(plstr::split_lines(&source, keepends).context("splitlines failed")?)
        }
        Commands::Startswith { source, prefix } => {
            let source = input(&source)?;
            Output::Flag(
                plstr::starts_with(&source, prefix.as_bytes()).context("startswith failed")?,
            )
        }
        Commands::Endswith { source, suffix } => {
            let source = input(&source)?;
            Output::Flag(plstr::ends_with(&source, suffix.as_bytes()).context("endswith failed")?)
        }
        Commands::Strip {
            source,
            chars,
            left,
            right,
        } => {
            let source = input(&source)?;
            let chars = chars.as_deref().map(str::as_bytes);
            let stripped = match (left, right) {
                (true, _) => plstr::lstrip(&source, chars),
                (_, true) => plstr::rstrip(&source, chars),
                _ => plstr::strip(&source, chars),
            };
            Output::Bytes(stripped.context("strip failed")?)
        }
        Commands::Translate {
            source,
            deletechars,
            table,
        } => {
            let source = input(&source)?;
            let table = table.as_deref().map(str::as_bytes);
            Output::Bytes(
                plstr::translate(&source, table, deletechars.as_bytes())
                    .context("translate failed")?,
            )
        }
        Commands::Count { source, needle } => {
            let source = input(&source)?;
            Output::Count(plstr::count(&source, needle.as_bytes()).context("count failed")?)
        }
        Commands::Expandtabs { source, tabsize } => {
            let source = input(&source)?;
            Output::Bytes(
                plstr::expand_tabs(&source, tabsize)
                    .with_context(|| format!("expandtabs with tab size {tabsize} failed"))?,
            )
        }
    };
    Ok(output)
}

fn write_bytes(out: &mut impl Write, bytes: &[u8], escape: bool) -> io::Result<()> {
    if escape {
        for &byte in bytes {
            write!(out, "{}", std::ascii::escape_default(byte))?;
        }
    } else {
        out.write_all(bytes)?;
    }
    out.write_all(b"\n")
}

fn write_output(out: &mut impl Write, output: &Output, escape: bool) -> io::Result<()> {
    match output {
        Output::Bytes(bytes) => write_bytes(out, bytes, escape),
        Output::Lines(lines) => {
            for line in lines {
                write_bytes(out, line, escape)?;
            }
            Ok(())
        }
        Output::Flag(flag) => writeln!(out, "{flag}"),
        Output::Count(n) => writeln!(out, "{n}"),
    }
}

/// Runs one subcommand and writes its result to stdout.
pub(crate) fn run(command: Commands, escape: bool) -> Result<()> {
    let output = execute(command)?;
    debug!("writing {output:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, &output, escape).context("failed to write output")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
