//! Suffix/prefix overlap computation
//!
//! Overlaps are measured in bytes. An overlap is only accepted where it ends on
//! a character boundary of the second string, so trimming it never splits a
//! UTF-8 sequence.

use crate::domain::reduce::ReducedSet;

/// Longest suffix of `a` that is also a prefix of `b`
///
/// Scans candidate lengths from `min(a.len(), b.len())` down to 1 and returns
/// the first match, or 0 when the strings do not overlap.
pub fn overlap(a: &str, b: &str) -> usize {
    let (head, tail) = (a.as_bytes(), b.as_bytes());
    let max = head.len().min(tail.len());

    for k in (1..=max).rev() {
        if b.is_char_boundary(k) && head[head.len() - k..] == tail[..k] {
            return k;
        }
    }
    0
}

/// Pairwise overlap lengths of a reduced set
///
/// Stored row-major in a flat `n * n` buffer; `get(i, j)` is the overlap of
/// string `i` followed by string `j`. The diagonal is 0 and never read by the
/// search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlapMatrix {
    n: usize,
    cells: Vec<usize>,
}

impl OverlapMatrix {
    /// Build the matrix for every ordered pair of distinct members
    pub fn build(set: &ReducedSet<'_>) -> Self {
        let n = set.len();
        let mut cells = vec![0; n * n];

        for (i, a) in set.strings().iter().enumerate() {
            for (j, b) in set.strings().iter().enumerate() {
                if i != j {
                    cells[i * n + j] = overlap(a, b);
                }
            }
        }

        Self { n, cells }
    }

    /// Overlap of `i` followed by `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.n + j]
    }

    /// Matrix dimension
    pub fn size(&self) -> usize {
        self.n
    }
}
