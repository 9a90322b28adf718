//! Solver limits and shared constants
//!
//! Note: the DP arena holds `n * 2^n` states, so the string-count ceilings below
//! bound both time and memory of a single search.

// =============================================================================
// String-count ceilings
// =============================================================================

/// Default ceiling on the number of strings that reach the DP search (n = 16)
///
/// 16 * 2^16 = 1,048,576 states, a few megabytes of arena.
pub const DEFAULT_MAX_STRINGS: usize = 16;

/// Hard ceiling that no configuration can raise (n = 20)
///
/// 20 * 2^20 = 20,971,520 states, roughly 190 MB of arena.
pub const HARD_MAX_STRINGS: usize = 20;

// =============================================================================
// DP arena
// =============================================================================

/// Marker for a state that has not been reached yet
pub const UNREACHED: usize = usize::MAX;

/// Predecessor marker for singleton states (path start)
pub const NO_PREDECESSOR: u8 = u8::MAX;

// =============================================================================
// File format
// =============================================================================

/// Extension of JSON Lines instance files
pub const INSTANCE_FILE_EXTENSION: &str = "jsonl";

/// Prefix of comment lines in instance files
pub const COMMENT_PREFIX: char = '#';
