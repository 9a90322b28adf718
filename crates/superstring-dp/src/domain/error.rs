//! Error taxonomy of the superstring pipeline

use thiserror::Error;

/// Errors surfaced by the solver
///
/// The computation is deterministic, so retrying the same input always
/// reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuperstringError {
    /// An input element has no text value (null at the caller's boundary)
    #[error("Invalid input: element {index} is null")]
    InvalidInput { index: usize },

    /// Too many strings survive reduction for the exponential search
    #[error("Resource exhaustion: {count} strings exceed the search limit of {limit}")]
    ResourceExhaustion { count: usize, limit: usize },
}
