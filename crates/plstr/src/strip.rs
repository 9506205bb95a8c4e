//! Trimming of byte sets from the ends of a string.

use crate::alloc;
use crate::{require, Result};

/// Bytes stripped when no explicit set is given: tab, line feed, vertical
/// tab, form feed, carriage return and space.
pub const DEFAULT_STRIP_SET: &[u8] = b"\t\n\x0b\x0c\r ";

/// Membership table for the bytes to strip.
struct ByteSet([bool; 256]);

impl ByteSet {
    /// An absent or empty `chars` selects [`DEFAULT_STRIP_SET`].
    fn new(chars: Option<&[u8]>) -> Self {
        let chars = match chars {
            Some(chars) if !chars.is_empty() => chars,
            _ => DEFAULT_STRIP_SET,
        };
        let mut set = [false; 256];
        for &byte in chars {
            set[byte as usize] = true;
        }
        Self(set)
    }

    fn contains(&self, byte: u8) -> bool {
        self.0[byte as usize]
    }

    /// Index of the first byte not in the set, or `source.len()`.
    fn first_kept(&self, source: &[u8]) -> usize {
        source
            .iter()
            .position(|&b| !self.contains(b))
            .unwrap_or(source.len())
    }

    /// One past the last byte not in the set, or 0.
    fn last_kept_end(&self, source: &[u8]) -> usize {
        source
            .iter()
            .rposition(|&b| !self.contains(b))
            .map_or(0, |i| i + 1)
    }
}

/// Removes bytes in `chars` from both ends of `source`.
///
/// When `chars` is `None` or empty, [`DEFAULT_STRIP_SET`] is used. A source
/// made only of strippable bytes yields an empty result.
///
/// # Example
///
/// ```
/// use plstr::strip;
///
/// assert_eq!(strip(b"   lots of space   ", None).unwrap(), b"lots of space");
/// assert_eq!(strip(b"xxxxTheDude99xxxx", Some(&b"x"[..])).unwrap(), b"TheDude99");
/// ```
pub fn strip(source: &[u8], chars: Option<&[u8]>) -> Result<Vec<u8>> {
    require(source, "source")?;
    let set = ByteSet::new(chars);
    let start = set.first_kept(source);
    let end = set.last_kept_end(source).max(start);
    alloc::owned(&source[start..end])
}

/// Removes bytes in `chars` from the start of `source`.
///
/// Argument rules are the same as for [`strip`].
///
/// # Example
///
/// ```
/// use plstr::lstrip;
///
/// assert_eq!(lstrip(b"  indented  ", None).unwrap(), b"indented  ");
/// ```
pub fn lstrip(source: &[u8], chars: Option<&[u8]>) -> Result<Vec<u8>> {
    require(source, "source")?;
    let set = ByteSet::new(chars);
    alloc::owned(&source[set.first_kept(source)..])
}

/// Removes bytes in `chars` from the end of `source`.
///
/// Argument rules are the same as for [`strip`].
///
/// # Example
///
/// ```
/// use plstr::rstrip;
///
/// assert_eq!(rstrip(b"line\r\n", None).unwrap(), b"line");
/// ```
pub fn rstrip(source: &[u8], chars: Option<&[u8]>) -> Result<Vec<u8>> {
    require(source, "source")?;
    let set = ByteSet::new(chars);
    alloc::owned(&source[..set.last_kept_end(source)])
}
