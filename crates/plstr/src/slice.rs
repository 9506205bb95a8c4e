//! Substring extraction with negative-index support.

use crate::alloc;
use crate::bounds::Bounds;
use crate::Result;

/// Copies the bytes `[offset, limit)` of `source` into a new buffer.
///
/// Negative `offset` or `limit` values count from the end of `source`. The
/// range must be non-empty and lie inside the source; see
/// [`Bounds::resolve`] for the exact rules.
///
/// # Example
///
/// ```
/// use plstr::slice;
///
/// let s = b"spam, eggs, and ham";
/// assert_eq!(slice(s, 3, 9).unwrap(), b"m, egg");
/// assert_eq!(slice(s, 1, -10).unwrap(), b"pam, egg");
/// assert!(slice(s, 3, 3).is_err());
/// ```
pub fn slice(source: &[u8], offset: isize, limit: isize) -> Result<Vec<u8>> {
    let bounds = Bounds::resolve(source.len(), offset, limit)?;
    alloc::owned(bounds.subarray(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrError;

    #[test]
    fn test_slice_is_independent() {
        let source = b"spam, eggs, and ham".to_vec();
        let mut sliced = slice(&source, 0, 4).unwrap();
        sliced[0] = b'S';
        assert_eq!(sliced, b"Spam");
        assert_eq!(source, b"spam, eggs, and ham");
    }

    #[test]
    fn test_slice_whole() {
        assert_eq!(slice(b"abc", 0, 3).unwrap(), b"abc");
        assert_eq!(slice(b"abc", -3, 3).unwrap(), b"abc");
    }

    #[test]
    fn test_slice_empty_source() {
        assert_eq!(slice(b"", 0, 0), Err(StrError::InvalidArgument("source")));
    }
}
