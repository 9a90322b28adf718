//! Application layer - Use case implementations
//!
//! This module chains the domain stages into single-instance and batch solves.

pub mod batch;
pub mod solver;
