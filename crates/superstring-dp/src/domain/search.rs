//! Optimal merge-order search
//!
//! Held-Karp style dynamic programming over `(subset, last)` states. The table
//! is a flat arena indexed by `mask * n + last`; each cell holds the minimal
//! merged length of a path visiting exactly `mask` and ending at `last`, plus
//! the predecessor used to reach it.
//!
//! Tie-break: a cell is only overwritten on strict improvement and
//! predecessors are tried in ascending index order, so the smallest
//! predecessor wins among equal lengths. Among equally short complete paths
//! the smallest final index wins.

use crate::constants::{HARD_MAX_STRINGS, NO_PREDECESSOR, UNREACHED};
use crate::domain::error::SuperstringError;
use crate::domain::overlap::OverlapMatrix;
use crate::domain::reduce::ReducedSet;
use log::{debug, warn};

/// Minimal-length ordering of a reduced set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptimalPath {
    order: Vec<usize>,
    length: usize,
}

impl OptimalPath {
    /// Member indices in merge order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Merged length in bytes
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Flat DP arena over `(mask, last)` states
struct DpTable {
    n: usize,
    cost: Vec<usize>,
    pred: Vec<u8>,
}

impl DpTable {
    fn new(n: usize) -> Self {
        let states = n << n;
        Self {
            n,
            cost: vec![UNREACHED; states],
            pred: vec![NO_PREDECESSOR; states],
        }
    }

    #[inline]
    fn index(&self, mask: usize, last: usize) -> usize {
        mask * self.n + last
    }
}

/// Merged length of members visited in `order`
///
/// Used to score arbitrary orderings; `search` reaches the minimum of this
/// over all permutations.
pub fn path_length(set: &ReducedSet<'_>, overlaps: &OverlapMatrix, order: &[usize]) -> usize {
    let mut length = 0;
    let mut previous: Option<usize> = None;

    for &member in order {
        length += set.get(member).len();
        if let Some(prev) = previous {
            length -= overlaps.get(prev, member);
        }
        previous = Some(member);
    }

    length
}

/// Find a permutation of the reduced set with minimal merged length
///
/// # Arguments
/// * `set` - Containment-free strings
/// * `overlaps` - Overlap matrix built from `set`
/// * `max_strings` - Ceiling on `set.len()`; clamped to `HARD_MAX_STRINGS`
///
/// # Returns
/// The optimal path, or `ResourceExhaustion` before any allocation when the set
/// is too large. An empty set yields an empty path of length 0.
pub fn search(
    set: &ReducedSet<'_>,
    overlaps: &OverlapMatrix,
    max_strings: usize,
) -> Result<OptimalPath, SuperstringError> {
    let n = set.len();
    let limit = max_strings.min(HARD_MAX_STRINGS);

    if n > limit {
        warn!("Refusing search over {} strings (limit {})", n, limit);
        return Err(SuperstringError::ResourceExhaustion { count: n, limit });
    }

    if n == 0 {
        return Ok(OptimalPath::default());
    }

    let lengths: Vec<usize> = set.strings().iter().map(|s| s.len()).collect();
    let mut table = DpTable::new(n);
    debug!("DP search over {} strings ({} states)", n, table.cost.len());

    // Base case: every singleton path
    for (i, &len) in lengths.iter().enumerate() {
        let slot = table.index(1 << i, i);
        table.cost[slot] = len;
    }

    // Numeric order visits every subset before its supersets
    let full = (1usize << n) - 1;
    for mask in 1..=full {
        for i in 0..n {
            if mask & (1 << i) == 0 {
                continue;
            }

            let current = table.cost[table.index(mask, i)];
            if current == UNREACHED {
                continue;
            }

            for j in 0..n {
                if mask & (1 << j) != 0 {
                    continue;
                }

                let candidate = current + lengths[j] - overlaps.get(i, j);
                let slot = table.index(mask | (1 << j), j);
                if candidate < table.cost[slot] {
                    table.cost[slot] = candidate;
                    table.pred[slot] = i as u8;
                }
            }
        }
    }

    let mut best_last = 0;
    let mut best = UNREACHED;
    for last in 0..n {
        let cost = table.cost[table.index(full, last)];
        if cost < best {
            best = cost;
            best_last = last;
        }
    }

    // Follow predecessors back to the singleton start
    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut last = best_last;
    loop {
        order.push(last);
        let pred = table.pred[table.index(mask, last)];
        if pred == NO_PREDECESSOR {
            break;
        }
        mask &= !(1 << last);
        last = pred as usize;
    }
    order.reverse();

    debug!("Optimal merged length {} via order {:?}", best, order);

    Ok(OptimalPath {
        order,
        length: best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reduce::reduce;

    fn run(input: &[&str]) -> OptimalPath {
        let set = reduce(input);
        let overlaps = OverlapMatrix::build(&set);
        search(&set, &overlaps, HARD_MAX_STRINGS).unwrap()
    }

    #[test]
    fn test_search_empty_set() {
        let path = run(&[]);
        assert!(path.is_empty());
        assert_eq!(path.length(), 0);
    }

    #[test]
    fn test_search_singleton() {
        let path = run(&["hello"]);
        assert_eq!(path.order(), &[0]);
        assert_eq!(path.length(), 5);
    }

    #[test]
    fn test_search_chain() {
        let path = run(&["abc", "bcd", "cde"]);
        assert_eq!(path.order(), &[0, 1, 2]);
        assert_eq!(path.length(), 5);
    }

    #[test]
    fn test_search_chain_shuffled_input() {
        // Same strings, different input order: the optimal order follows overlaps
        let path = run(&["cde", "abc", "bcd"]);
        assert_eq!(path.order(), &[1, 2, 0]);
        assert_eq!(path.length(), 5);
    }

    #[test]
    fn test_search_tie_prefers_smallest_final_then_predecessor() {
        // No overlaps: both orders have length 6. Final index 0 wins, reached
        // from predecessor 1.
        let path = run(&["xyz", "abc"]);
        assert_eq!(path.length(), 6);
        assert_eq!(path.order(), &[1, 0]);
    }

    #[test]
    fn test_search_beats_largest_overlap_first() {
        // Merging the largest overlap first ("cabab" + "ababc") leads to 10
        let input = ["cabab", "baba", "ababc"];
        let path = run(&input);
        assert_eq!(path.order(), &[0, 1, 2]);
        assert_eq!(path.length(), 8); // "cabababc"
    }

    #[test]
    fn test_search_visits_every_member_once() {
        let path = run(&["ab", "bc", "ca", "dd", "da"]);
        let mut seen = path.order().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_search_length_matches_path_length() {
        let input = ["tagg", "gcta", "ctaag", "aggc"];
        let set = reduce(&input);
        let overlaps = OverlapMatrix::build(&set);
        let path = search(&set, &overlaps, HARD_MAX_STRINGS).unwrap();
        assert_eq!(path_length(&set, &overlaps, path.order()), path.length());
    }

    #[test]
    fn test_search_rejects_over_limit() {
        let input = ["a", "b", "c", "d"];
        let set = reduce(&input);
        let overlaps = OverlapMatrix::build(&set);
        let result = search(&set, &overlaps, 3);
        assert_eq!(
            result,
            Err(SuperstringError::ResourceExhaustion { count: 4, limit: 3 })
        );
    }

    #[test]
    fn test_search_limit_clamped_to_hard_ceiling() {
        let input: Vec<String> = (0..HARD_MAX_STRINGS + 1)
            .map(|i| format!("s{:02}", i))
            .collect();
        let set = reduce(&input);
        let overlaps = OverlapMatrix::build(&set);
        let result = search(&set, &overlaps, usize::MAX);
        assert_eq!(
            result,
            Err(SuperstringError::ResourceExhaustion {
                count: HARD_MAX_STRINGS + 1,
                limit: HARD_MAX_STRINGS,
            })
        );
    }

    #[test]
    fn test_path_length_no_overlap() {
        let set = reduce(&["ab", "cd"]);
        let overlaps = OverlapMatrix::build(&set);
        assert_eq!(path_length(&set, &overlaps, &[0, 1]), 4);
        assert_eq!(path_length(&set, &overlaps, &[]), 0);
    }
}
