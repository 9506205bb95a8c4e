//! Byte deletion and table substitution.

use crate::alloc;
use crate::{require, Result, StrError};

/// A 256-entry byte-to-byte substitution map.
///
/// Starts as the identity map; each `(from, to)` pair given to
/// [`SwapTable::new`] overrides one entry, later pairs winning over earlier
/// ones for the same `from` byte.
///
/// # Example
///
/// ```
/// use plstr::SwapTable;
///
/// let table = SwapTable::new(b"ab", b"xy").unwrap();
/// assert_eq!(table.get(b'a'), b'x');
/// assert_eq!(table.get(b'c'), b'c');
/// assert_eq!(table.apply(b"abc").unwrap(), b"xyc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapTable([u8; 256]);

impl SwapTable {
    /// Creates the identity map.
    pub fn identity() -> Self {
        let mut map = [0u8; 256];
        for (byte, slot) in map.iter_mut().enumerate() {
            *slot = byte as u8;
        }
        Self(map)
    }

    /// Creates a map sending `from[i]` to `to[i]` for every `i`.
    ///
    /// Fails when the two sides differ in length.
    pub fn new(from: &[u8], to: &[u8]) -> Result<Self> {
        if from.len() != to.len() {
            log::trace!(
                "swap table sides differ in length: {} != {}",
                from.len(),
                to.len()
            );
            return Err(StrError::InvalidArgument("table"));
        }
        let mut table = Self::identity();
        for (&f, &t) in from.iter().zip(to) {
            table.0[f as usize] = t;
        }
        Ok(table)
    }

    /// Returns the substitute for `byte`.
    pub fn get(&self, byte: u8) -> u8 {
        self.0[byte as usize]
    }

    /// Returns a new buffer with every byte of `source` substituted.
    pub fn apply(&self, source: &[u8]) -> Result<Vec<u8>> {
        let mut buf = alloc::with_capacity(source.len())?;
        buf.extend(source.iter().map(|&b| self.get(b)));
        Ok(buf)
    }
}

impl Default for SwapTable {
    fn default() -> Self {
        Self::identity()
    }
}

fn delete(source: &[u8], deletechars: &[u8]) -> Result<Vec<u8>> {
    let mut doomed = [false; 256];
    for &byte in deletechars {
        doomed[byte as usize] = true;
    }
    let kept = source.iter().filter(|&&b| !doomed[b as usize]).count();
    let mut buf = alloc::with_capacity(kept)?;
    buf.extend(source.iter().copied().filter(|&b| !doomed[b as usize]));
    Ok(buf)
}

/// Deletes or substitutes bytes of `source`.
///
/// Without a `table`, every byte that appears in `deletechars` is removed.
/// With a `table`, `table[i]` is replaced by `deletechars[i]` throughout
/// (see [`SwapTable`]); both must have the same length and the result keeps
/// the length of `source`.
///
/// # Example
///
/// ```
/// use plstr::translate;
///
/// let s = b"read this short text";
/// assert_eq!(translate(s, None, b"aeiou").unwrap(), b"rd ths shrt txt");
/// assert_eq!(
///     translate(s, Some(&b"aeiou"[..]), b"xxxxx").unwrap(),
///     b"rxxd thxs shxrt txxt"
/// );
/// ```
pub fn translate(source: &[u8], table: Option<&[u8]>, deletechars: &[u8]) -> Result<Vec<u8>> {
    require(source, "source")?;
    require(deletechars, "deletechars")?;
    match table {
        Some(table) => {
            require(table, "table")?;
            SwapTable::new(table, deletechars)?.apply(source)
        }
        None => delete(source, deletechars),
    }
}
