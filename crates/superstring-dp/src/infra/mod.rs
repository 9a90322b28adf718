//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles instance and result files.

pub mod instance_io;
