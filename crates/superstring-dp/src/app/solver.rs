//! Single-instance solve workflow
//!
//! Runs the full pipeline for one input sequence. Every call owns its working
//! state, so the functions here are safe to call from many threads at once.

use crate::constants::{DEFAULT_MAX_STRINGS, HARD_MAX_STRINGS};
use crate::domain::error::SuperstringError;
use crate::domain::overlap::OverlapMatrix;
use crate::domain::reconstruct::reconstruct;
use crate::domain::reduce::reduce;
use crate::domain::search::search;
use log::debug;

/// Solver configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveOptions {
    /// Maximum number of strings allowed to reach the DP search
    pub max_strings: usize,
}

impl SolveOptions {
    /// Create options with the default ceiling
    pub fn new() -> Self {
        Self {
            max_strings: DEFAULT_MAX_STRINGS,
        }
    }

    /// Create options with a custom ceiling (clamped to `HARD_MAX_STRINGS`)
    pub fn with_max_strings(max_strings: usize) -> Self {
        Self {
            max_strings: max_strings.min(HARD_MAX_STRINGS),
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A solved instance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Superstring {
    /// The shortest superstring
    pub text: String,
    /// Original input indices of the merged strings, in merge order
    pub order: Vec<usize>,
    /// Byte offset of every input string inside `text`
    pub offsets: Vec<usize>,
}

impl Superstring {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Compute the shortest superstring of `strings` with default options
///
/// An empty input yields the empty string.
///
/// # Example
/// ```
/// use superstring_dp::shortest_superstring;
///
/// let text = shortest_superstring(&["abc", "bcd", "cde"]).unwrap();
/// assert_eq!(text, "abcde");
/// ```
pub fn shortest_superstring<S: AsRef<str>>(strings: &[S]) -> Result<String, SuperstringError> {
    solve(strings, &SolveOptions::default()).map(|solved| solved.text)
}

/// Compute the shortest superstring with merge order and placements
///
/// # Arguments
/// * `strings` - Input sequence; duplicates and empty strings are allowed
/// * `options` - Solver configuration
///
/// # Returns
/// The solved instance, or `ResourceExhaustion` when more than
/// `options.max_strings` strings survive reduction
pub fn solve<S: AsRef<str>>(
    strings: &[S],
    options: &SolveOptions,
) -> Result<Superstring, SuperstringError> {
    // The empty collection has the empty superstring
    if strings.is_empty() {
        return Ok(Superstring::default());
    }

    let reduced = reduce(strings);
    debug!(
        "Reduced {} strings to {} containment-free strings",
        strings.len(),
        reduced.len()
    );

    let overlaps = OverlapMatrix::build(&reduced);
    let path = search(&reduced, &overlaps, options.max_strings)?;
    let rebuilt = reconstruct(&reduced, &overlaps, &path);

    let order = path
        .order()
        .iter()
        .map(|&member| reduced.origins()[member])
        .collect();
    let offsets = reduced
        .placements()
        .iter()
        .map(|p| rebuilt.starts()[p.member] + p.offset)
        .collect();

    Ok(Superstring {
        text: rebuilt.into_text(),
        order,
        offsets,
    })
}

/// Solve an input whose elements may be missing
///
/// A `None` element is rejected as `InvalidInput` carrying its index; it is
/// never treated as an empty string.
pub fn solve_nullable<S: AsRef<str>>(
    strings: &[Option<S>],
    options: &SolveOptions,
) -> Result<Superstring, SuperstringError> {
    let present = strings
        .iter()
        .enumerate()
        .map(|(index, s)| match s {
            Some(s) => Ok(s.as_ref()),
            None => Err(SuperstringError::InvalidInput { index }),
        })
        .collect::<Result<Vec<&str>, _>>()?;

    solve(&present, options)
}
