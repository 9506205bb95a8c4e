//! Byte string copy utilities.

use crate::alloc;
use crate::{Result, StrError};

/// Creates an owned copy of `source`.
///
/// An empty source produces an empty copy.
///
/// # Example
///
/// ```
/// use plstr::copy;
///
/// let original = b"spam, eggs, and ham";
/// let duplicate = copy(original).unwrap();
/// assert_eq!(duplicate, original);
/// ```
pub fn copy(source: &[u8]) -> Result<Vec<u8>> {
    alloc::owned(source)
}

/// Copies `source` into the caller-owned `destination`.
///
/// The capacity is the length of `destination`. When it is at least
/// `source.len()` the bytes are written to the front of `destination` and the
/// written region is returned; otherwise nothing is written.
///
/// # Example
///
/// ```
/// use plstr::copy_into;
///
/// let mut buf = [0u8; 8];
/// assert_eq!(copy_into(b"foo", &mut buf).unwrap(), b"foo");
/// assert_eq!(&buf[..4], b"foo\0");
///
/// let mut small = [0u8; 2];
/// assert!(copy_into(b"foo", &mut small).is_err());
/// assert_eq!(small, [0, 0]);
/// ```
pub fn copy_into<'a>(source: &[u8], destination: &'a mut [u8]) -> Result<&'a [u8]> {
    if destination.len() < source.len() {
        log::trace!(
            "destination holds {} bytes, source needs {}",
            destination.len(),
            source.len()
        );
        return Err(StrError::InvalidArgument("destination"));
    }
    let written = &mut destination[..source.len()];
    written.copy_from_slice(source);
    Ok(written)
}
