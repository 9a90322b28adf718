//! Domain layer - Pure computational logic
//!
//! This module contains the superstring pipeline stages as pure functions
//! without I/O dependencies: reduce → overlap → search → reconstruct.

pub mod error;
pub mod overlap;
pub mod reconstruct;
pub mod reduce;
pub mod search;
pub mod verify;
