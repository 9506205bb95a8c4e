//! Property checks over randomly generated byte strings.

use plstr::{concat, count, slice, split, strip, translate};
use proptest::prelude::*;

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

/// A non-empty source with two indices into it.
fn source_and_indices() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    prop::collection::vec(any::<u8>(), 1..64).prop_flat_map(|source| {
        let len = source.len();
        (Just(source), 0..len, 0..len)
    })
}

/// Small alphabet so delimiters and strip sets actually occur.
fn abc(min: usize, max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc ".to_vec()), min..max)
}

proptest! {
    #[test]
    fn slice_returns_exact_range((source, a, b) in source_and_indices()) {
        let (i, j) = (a.min(b), a.max(b) + 1);
        let len = source.len() as isize;
        prop_assert_eq!(slice(&source, i as isize, j as isize).unwrap(), &source[i..j]);
        prop_assert_eq!(
            slice(&source, i as isize - len, j as isize).unwrap(),
            &source[i..j]
        );
    }

    #[test]
    fn slice_rejects_empty_and_reversed(source in bytes(64), a in 0isize..64, b in 0isize..64) {
        prop_assert!(slice(&source, a, a).is_err());
        if a < b {
            prop_assert!(slice(&source, b, a).is_err());
        }
    }

    #[test]
    fn concat_preserves_both_operands(a in bytes(32), b in bytes(32)) {
        let joined = concat(&a, &b).unwrap();
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(&joined[..a.len()], &a[..]);
        prop_assert_eq!(&joined[a.len()..], &b[..]);
        prop_assert_eq!(concat(&a, b"").unwrap(), a.clone());
        prop_assert_eq!(concat(b"", &b).unwrap(), b.clone());
    }

    #[test]
    fn split_then_join_reproduces_source(source in abc(1, 48), delimiter in abc(1, 3)) {
        match split(&source, &delimiter) {
            Ok(parts) => {
                prop_assert_eq!(parts.len(), count(&source, &delimiter).unwrap() + 1);
                prop_assert_eq!(parts.join(&delimiter[..]), source);
            }
            Err(_) => prop_assert_eq!(count(&source, &delimiter).unwrap(), 0),
        }
    }

    #[test]
    fn strip_is_idempotent(source in abc(1, 48), chars in abc(0, 3)) {
        let chars = Some(&chars[..]);
        let once = strip(&source, chars).unwrap();
        if !once.is_empty() {
            prop_assert_eq!(strip(&once, chars).unwrap(), once);
        }
    }

    #[test]
    fn translate_delete_removes_only_listed_bytes(source in abc(1, 48)) {
        let out = translate(&source, None, b"a").unwrap();
        let expected: Vec<u8> = source.iter().copied().filter(|&b| b != b'a').collect();
        prop_assert_eq!(out, expected);
    }
}
