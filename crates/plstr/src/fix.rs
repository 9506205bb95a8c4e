//! Prefix and suffix tests.

use crate::{require, Result};

/// Tests whether `source` begins with `prefix`.
///
/// An empty `source` or `prefix` is an error rather than a trivial match.
///
/// # Example
///
/// ```
/// use plstr::starts_with;
///
/// assert_eq!(starts_with(b"http://google.com", b"http://"), Ok(true));
/// assert_eq!(starts_with(b"http://google.com", b"https://"), Ok(false));
/// assert!(starts_with(b"http://google.com", b"").is_err());
/// ```
pub fn starts_with(source: &[u8], prefix: &[u8]) -> Result<bool> {
    require(source, "source")?;
    require(prefix, "prefix")?;
    Ok(source.starts_with(prefix))
}

/// Tests whether `source` ends with `suffix`.
///
/// An empty `source` or `suffix` is an error rather than a trivial match.
///
/// # Example
///
/// ```
/// use plstr::ends_with;
///
/// assert_eq!(ends_with(b"archive.tar.gz", b".gz"), Ok(true));
/// assert_eq!(ends_with(b"archive.tar.gz", b".zip"), Ok(false));
/// ```
pub fn ends_with(source: &[u8], suffix: &[u8]) -> Result<bool> {
    require(source, "source")?;
    require(suffix, "suffix")?;
    Ok(source.ends_with(suffix))
}
