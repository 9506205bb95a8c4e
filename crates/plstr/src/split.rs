//! Delimiter and line-ending splitting.

use crate::alloc;
use crate::search::Matches;
use crate::{require, Result, StrError};

/// Splits `source` on every non-overlapping occurrence of `delimiter`.
///
/// Runs of delimiters do not collapse: the bytes between two consecutive
/// occurrences become one element even when empty. `N` occurrences produce
/// `N + 1` elements. A source without any occurrence is an error.
///
/// # Example
///
/// ```
/// use plstr::split;
///
/// let parts = split(b"a,,b", b",").unwrap();
/// assert_eq!(parts, vec![b"a".to_vec(), b"".to_vec(), b"b".to_vec()]);
/// assert!(split(b"abc", b",").is_err());
/// ```
pub fn split(source: &[u8], delimiter: &[u8]) -> Result<Vec<Vec<u8>>> {
    require(source, "source")?;
    require(delimiter, "delimiter")?;

    let mut parts = Vec::new();
    let mut start = 0;
    for at in Matches::new(source, delimiter) {
        parts.push(alloc::owned(&source[start..at])?);
        start = at + delimiter.len();
    }
    if parts.is_empty() {
        log::trace!("delimiter does not occur in source");
        return Err(StrError::NotFound("delimiter"));
    }
    parts.push(alloc::owned(&source[start..])?);
    Ok(parts)
}

fn is_line_end(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Splits `source` on every line-feed and carriage-return byte.
///
/// Each byte is its own delimiter, so `"\r\n"` ends two lines. With
/// `keep_ends` the terminating byte stays at the end of its line. Bytes after
/// the last terminator form a final line; nothing is added when the source
/// ends with a terminator.
///
/// # Example
///
/// ```
/// use plstr::split_lines;
///
/// let lines = split_lines(b"one\ntwo", false).unwrap();
/// assert_eq!(lines, vec![b"one".to_vec(), b"two".to_vec()]);
///
/// let lines = split_lines(b"one\ntwo\n", true).unwrap();
/// assert_eq!(lines, vec![b"one\n".to_vec(), b"two\n".to_vec()]);
/// ```
pub fn split_lines(source: &[u8], keep_ends: bool) -> Result<Vec<Vec<u8>>> {
    require(source, "source")?;

    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &byte) in source.iter().enumerate() {
        if !is_line_end(byte) {
            continue;
        }
        let end = if keep_ends { i + 1 } else { i };
        lines.push(alloc::owned(&source[start..end])?);
        start = i + 1;
    }
    if lines.is_empty() {
        log::trace!("source has no line ending");
        return Err(StrError::NotFound("line ending"));
    }
    if start < source.len() {
        lines.push(alloc::owned(&source[start..])?);
    }
    Ok(lines)
}
