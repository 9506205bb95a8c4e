//! Occurrence counting.

use crate::search::Matches;
use crate::{require, Result};

/// Counts the non-overlapping occurrences of `needle` in `source`.
///
/// The scan is the same one [`split`](crate::split) uses. An empty argument
/// is an error, while a needle that simply does not occur counts as 0.
///
/// # Example
///
/// ```
/// use plstr::count;
///
/// assert_eq!(count(b"one three three seven", b"three"), Ok(2));
/// assert_eq!(count(b"one three three seven", b"not-present"), Ok(0));
/// assert!(count(b"", b"x").is_err());
/// ```
pub fn count(source: &[u8], needle: &[u8]) -> Result<usize> {
    require(source, "source")?;
    require(needle, "needle")?;
    Ok(Matches::new(source, needle).count())
}
