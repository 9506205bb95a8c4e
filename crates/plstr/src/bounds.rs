//! Offset/limit normalization for slicing.

use std::ops::Range;

use crate::{Result, StrError};

/// A resolved, non-empty half-open range `[offset, limit)` into a source.
///
/// Produced by [`Bounds::resolve`], which accepts Python-style negative
/// indices counted from the end of the source.
///
/// # Example
///
/// ```
/// use plstr::Bounds;
///
/// let bounds = Bounds::resolve(19, 1, -3).unwrap();
/// assert_eq!(bounds.range(), 1..16);
/// assert!(Bounds::resolve(19, 3, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Start position (inclusive).
    pub offset: usize,
    /// End position (exclusive).
    pub limit: usize,
}

impl Bounds {
    /// Resolves a signed `offset` and `limit` against a source of length `len`.
    ///
    /// A negative value is counted from the end: `len + value`. The request is
    /// rejected when the source is empty, when the range is empty or
    /// reversed, or when either resolved bound falls outside `0..=len`.
    pub fn resolve(len: usize, offset: isize, limit: isize) -> Result<Self> {
        if len == 0 {
            log::trace!("cannot slice an empty source");
            return Err(StrError::InvalidArgument("source"));
        }

        let out_of_range = || {
            log::trace!("rejecting range {offset}..{limit} for length {len}");
            StrError::OutOfRange { offset, limit, len }
        };

        let signed_len = isize::try_from(len).map_err(|_| out_of_range())?;
        let from_end = |index: isize| {
            if index < 0 {
                signed_len + index
            } else {
                index
            }
        };

        // Bounds still negative after adjustment compare as larger than any
        // length, so they are out of range.
        let start = usize::try_from(from_end(offset)).map_err(|_| out_of_range())?;
        let end = usize::try_from(from_end(limit)).map_err(|_| out_of_range())?;

        if end <= start || end > len || start > len {
            return Err(out_of_range());
        }

        Ok(Self {
            offset: start,
            limit: end,
        })
    }

    /// Number of bytes covered by the range.
    pub fn len(&self) -> usize {
        self.limit - self.offset
    }

    /// Always `false`: a resolved range covers at least one byte.
    pub fn is_empty(&self) -> bool {
        self.limit == self.offset
    }

    /// Returns the bounds as a [`Range`].
    pub fn range(&self) -> Range<usize> {
        self.offset..self.limit
    }

    /// Returns the part of `source` covered by the bounds.
    pub fn subarray<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.range()]
    }
}
