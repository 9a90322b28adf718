//! Batch solve workflow
//!
//! Solves many independent instances. With the `parallel` feature the
//! instances are spread over the rayon pool; each search itself stays
//! single-threaded.

use crate::app::solver::{SolveOptions, Superstring, solve_nullable};
use crate::domain::error::SuperstringError;
use log::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one instance in a batch
pub type BatchOutcome = Result<Superstring, SuperstringError>;

/// Aggregate counts over a batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Instances solved
    pub solved: usize,
    /// Instances rejected with invalid input
    pub invalid: usize,
    /// Instances rejected for size
    pub too_large: usize,
    /// Sum of superstring lengths over solved instances
    pub total_length: usize,
}

impl BatchSummary {
    /// Tally a slice of outcomes
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                match outcome {
                    Ok(solved) => {
                        summary.solved += 1;
                        summary.total_length += solved.len();
                    }
                    Err(SuperstringError::InvalidInput { .. }) => summary.invalid += 1,
                    Err(SuperstringError::ResourceExhaustion { .. }) => summary.too_large += 1,
                }
                summary
            })
    }

    /// Number of failed instances
    pub fn failed(&self) -> usize {
        self.invalid + self.too_large
    }
}

/// Solve every instance, preserving input order in the output
///
/// # Arguments
/// * `instances` - Input sequences; `None` elements are reported as invalid input
/// * `options` - Solver configuration shared by all instances
pub fn solve_batch<S>(instances: &[Vec<Option<S>>], options: &SolveOptions) -> Vec<BatchOutcome>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = instances.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = instances.iter();

    iter.enumerate()
        .map(|(index, instance)| {
            trace!("Solving instance {} ({} strings)", index, instance.len());
            solve_nullable(instance, options)
        })
        .collect()
}
