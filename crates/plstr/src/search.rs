//! Left-to-right, non-overlapping substring scan.

/// Iterator over the start positions of non-overlapping occurrences of a
/// needle in a haystack.
///
/// After each match the scan resumes immediately after it, so `"aaaa"`
/// contains two occurrences of `"aa"`, at positions 0 and 2. An empty needle
/// never matches.
///
/// # Example
///
/// ```
/// use plstr::Matches;
///
/// let starts: Vec<usize> = Matches::new(b"fooasdbarasdmagic", b"asd").collect();
/// assert_eq!(starts, vec![3, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct Matches<'h, 'n> {
    haystack: &'h [u8],
    needle: &'n [u8],
    x: usize,
}

impl<'h, 'n> Matches<'h, 'n> {
    /// Creates a scan over `haystack` for `needle`.
    pub fn new(haystack: &'h [u8], needle: &'n [u8]) -> Self {
        Self {
            haystack,
            needle,
            x: 0,
        }
    }

    /// Position the next scan starts from.
    pub fn cursor(&self) -> usize {
        self.x
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.needle.is_empty() {
            return None;
        }
        let found = self.haystack[self.x..]
            .windows(self.needle.len())
            .position(|window| window == self.needle)?;
        let start = self.x + found;
        self.x = start + self.needle.len();
        Some(start)
    }
}
