//! Byte-string utilities modeled on scripting-language string methods.
//!
//! Every operation takes borrowed byte slices, never mutates them, and hands
//! back a freshly allocated owned value (or writes into a caller-supplied
//! buffer, for [`copy_into`]). Failures are reported through [`StrError`];
//! no operation returns a partially built result.
//!
//! # Overview
//!
//! - [`slice`] - Python-style slicing with negative offsets and limits
//! - [`copy`] / [`copy_into`] - Owned copy or bounded copy into a fixed buffer
//! - [`concat`] - Concatenation into a new buffer
//! - [`split`] / [`split_lines`] - Delimiter and line-ending splitting
//! - [`starts_with`] / [`ends_with`] - Prefix and suffix tests
//! - [`strip`] / [`lstrip`] / [`rstrip`] - Trimming of byte sets
//! - [`translate`] - Byte deletion or table substitution
//! - [`count`] - Non-overlapping occurrence counting
//! - [`expand_tabs`] - Tab expansion
//!
//! # Example
//!
//! ```
//! use plstr::{slice, split, strip};
//!
//! assert_eq!(slice(b"spam, eggs, and ham", -13, -4).unwrap(), b"eggs, and");
//!
//! let parts = split(b"fooasdbarasdmagic", b"asd").unwrap();
//! assert_eq!(parts, vec![b"foo".to_vec(), b"bar".to_vec(), b"magic".to_vec()]);
//!
//! assert_eq!(strip(b"   lots of space   ", None).unwrap(), b"lots of space");
//! ```

mod alloc;
mod bounds;
mod concat;
mod copy;
mod count;
mod expand_tabs;
mod fix;
mod search;
mod slice;
mod split;
mod strip;
mod translate;

pub use bounds::Bounds;
pub use concat::concat;
pub use copy::{copy, copy_into};
pub use count::count;
pub use expand_tabs::expand_tabs;
pub use fix::{ends_with, starts_with};
pub use search::Matches;
pub use slice::slice;
pub use split::{split, split_lines};
pub use strip::{lstrip, rstrip, strip, DEFAULT_STRIP_SET};
pub use translate::{translate, SwapTable};

use thiserror::Error;

/// Error type for byte-string operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrError {
    /// A required argument was empty, or arguments did not fit together.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Offset and limit do not describe a non-empty range inside the source.
    #[error("range {offset}..{limit} is out of bounds for length {len}")]
    OutOfRange {
        offset: isize,
        limit: isize,
        len: usize,
    },
    /// The delimiter, line ending or tab the operation splits on is absent.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The result buffer could not be allocated.
    #[error("failed to allocate {0} bytes")]
    AllocationFailure(usize),
}

/// Result alias used by every operation in this crate.
pub type Result<T> = std::result::Result<T, StrError>;

/// Rejects an empty required argument.
pub(crate) fn require(arg: &[u8], name: &'static str) -> Result<()> {
    if arg.is_empty() {
        log::trace!("rejecting empty argument `{name}`");
        return Err(StrError::InvalidArgument(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(b"x", "source"), Ok(()));
        assert_eq!(require(b"", "source"), Err(StrError::InvalidArgument("source")));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StrError::InvalidArgument("delimiter").to_string(),
            "invalid argument: delimiter"
        );
        assert_eq!(
            StrError::OutOfRange {
                offset: 3,
                limit: 3,
                len: 19
            }
            .to_string(),
            "range 3..3 is out of bounds for length 19"
        );
        assert_eq!(StrError::NotFound("tab").to_string(), "tab not found");
        assert_eq!(
            StrError::AllocationFailure(8).to_string(),
            "failed to allocate 8 bytes"
        );
    }
}
