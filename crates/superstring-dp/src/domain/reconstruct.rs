//! Superstring reconstruction
//!
//! Replays an optimal path, appending each member with its overlap against the
//! previous member trimmed off.

use crate::domain::overlap::OverlapMatrix;
use crate::domain::reduce::ReducedSet;
use crate::domain::search::OptimalPath;

/// Reconstructed text and where each member starts in it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconstruction {
    text: String,
    starts: Vec<usize>,
}

impl Reconstruction {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of each member, indexed by member index
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Concatenate the members of `path` in order, trimming overlaps
///
/// The result has exactly `path.length()` bytes and contains every member of
/// `set` as a contiguous substring.
pub fn reconstruct(
    set: &ReducedSet<'_>,
    overlaps: &OverlapMatrix,
    path: &OptimalPath,
) -> Reconstruction {
    let mut text = String::with_capacity(path.length());
    let mut starts = vec![0; set.len()];
    let mut previous: Option<usize> = None;

    for &member in path.order() {
        let s = set.get(member);
        let skip = previous.map_or(0, |prev| overlaps.get(prev, member));

        starts[member] = text.len() - skip;
        // Overlaps end on a character boundary, so this slice is valid
        text.push_str(&s[skip..]);
        previous = Some(member);
    }

    debug_assert_eq!(text.len(), path.length());

    Reconstruction { text, starts }
}
