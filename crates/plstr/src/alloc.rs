//! Fallible allocation of result buffers.

use crate::{Result, StrError};

/// Allocates an empty buffer able to hold exactly `size` bytes.
///
/// Allocation failure is reported as [`StrError::AllocationFailure`] instead
/// of aborting the process.
pub(crate) fn with_capacity(size: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|_| {
        log::trace!("allocation of {size} bytes failed");
        StrError::AllocationFailure(size)
    })?;
    Ok(buf)
}

/// Allocates a buffer holding a copy of `bytes`.
pub(crate) fn owned(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut buf = with_capacity(bytes.len())?;
    buf.extend_from_slice(bytes);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_capacity() {
        let buf = with_capacity(16).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }

    #[test]
    fn test_with_capacity_overflow() {
        assert_eq!(
            with_capacity(usize::MAX),
            Err(StrError::AllocationFailure(usize::MAX))
        );
    }

    #[test]
    fn test_owned() {
        let original = b"abc".to_vec();
        let duplicate = owned(&original).unwrap();
        assert_eq!(original, duplicate);
        assert_ne!(original.as_ptr(), duplicate.as_ptr());
        assert_eq!(owned(b"").unwrap(), Vec::<u8>::new());
    }
}
