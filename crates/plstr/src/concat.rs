//! Concatenation into a new buffer.

use crate::alloc;
use crate::Result;

/// Concatenates `destination` and `source` into a new buffer.
///
/// All bytes of `destination` precede all bytes of `source`. Neither input is
/// modified.
///
/// # Example
///
/// ```
/// use plstr::concat;
///
/// assert_eq!(concat(b"foo", b"bar").unwrap(), b"foobar");
/// assert_eq!(concat(b"", b"bar").unwrap(), b"bar");
/// ```
pub fn concat(destination: &[u8], source: &[u8]) -> Result<Vec<u8>> {
    let mut buf = alloc::with_capacity(destination.len() + source.len())?;
    buf.extend_from_slice(destination);
    buf.extend_from_slice(source);
    Ok(buf)
}
