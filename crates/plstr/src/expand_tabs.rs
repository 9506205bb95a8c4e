//! Tab expansion.

use crate::alloc;
use crate::{require, Result, StrError};

/// Replaces every tab in `source` with `tabsize` spaces.
///
/// A `tabsize` of 0 removes tabs. Fails when `tabsize` is negative or
/// `source` contains no tab.
///
/// # Example
///
/// ```
/// use plstr::expand_tabs;
///
/// assert_eq!(expand_tabs(b"a\tb", 4).unwrap(), b"a    b");
/// assert_eq!(expand_tabs(b"a\tb", 0).unwrap(), b"ab");
/// ```
pub fn expand_tabs(source: &[u8], tabsize: isize) -> Result<Vec<u8>> {
    require(source, "source")?;
    let width = usize::try_from(tabsize).map_err(|_| {
        log::trace!("negative tab size {tabsize}");
        StrError::InvalidArgument("tabsize")
    })?;

    let tabs = source.iter().filter(|&&b| b == b'\t').count();
    if tabs == 0 {
        log::trace!("source has no tab");
        return Err(StrError::NotFound("tab"));
    }

    let size = tabs
        .checked_mul(width)
        .and_then(|spaces| spaces.checked_add(source.len() - tabs))
        .ok_or(StrError::AllocationFailure(usize::MAX))?;
    let mut buf = alloc::with_capacity(size)?;
    for &byte in source {
        if byte == b'\t' {
            buf.resize(buf.len() + width, b' ');
        } else {
            buf.push(byte);
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs(b"\ta\t\tb\t", 2).unwrap(), b"  a    b  ");
        assert_eq!(expand_tabs(b"\t", 1).unwrap(), b" ");
    }

    #[test]
    fn test_expand_tabs_zero_removes() {
        assert_eq!(expand_tabs(b"\ta\tb\t", 0).unwrap(), b"ab");
        assert_eq!(expand_tabs(b"\t\t", 0).unwrap(), b"");
    }

    #[test]
    fn test_expand_tabs_exact_length() {
        let source = b"x\ty\tz";
        let out = expand_tabs(source, 8).unwrap();
        assert_eq!(out.len(), source.len() + 2 * (8 - 1));
    }

    #[test]
    fn test_expand_tabs_errors() {
        assert_eq!(
            expand_tabs(b"", 4),
            Err(StrError::InvalidArgument("source"))
        );
        assert_eq!(
            expand_tabs(b"a\tb", -1),
            Err(StrError::InvalidArgument("tabsize"))
        );
        assert_eq!(expand_tabs(b"ab", 4), Err(StrError::NotFound("tab")));
    }

    #[test]
    fn test_expand_tabs_overflowing_size() {
        assert_eq!(
            expand_tabs(b"\t\t\t", isize::MAX),
            Err(StrError::AllocationFailure(usize::MAX))
        );
    }
}
