//! superstring-dp - Exact shortest common superstring
//!
//! This crate provides functionality to:
//! - Reduce a string collection to its containment-free core
//! - Compute pairwise suffix/prefix overlaps
//! - Find an optimal merge order with subset dynamic programming
//! - Reconstruct and verify the shortest superstring
//! - Solve batches of instances from JSON Lines files

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::batch::{BatchOutcome, BatchSummary, solve_batch};
pub use app::solver::{SolveOptions, Superstring, shortest_superstring, solve, solve_nullable};
pub use constants::*;
pub use domain::error::SuperstringError;
pub use domain::verify::{VerifyError, is_superstring, verify_placements};
