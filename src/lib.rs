//! Procedural pattern generator for a triangle-folding puzzle
//!
//! The system grows a connected chain of right triangles across a bounded,
//! layered triangular grid. Each step folds the chain flat along the grid or
//! up/down onto an adjacent layer, and generation retries whole attempts until
//! the chain covers exactly the requested number of triangles and passes a
//! difficulty-dependent shape check.

#![forbid(unsafe_code)]

/// Core algorithm implementation including fold geometry, validity rules, and the retry-driven generator
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Layered grid coordinates and the pattern occupancy store
pub mod spatial;

pub use io::error::{GenerationError, Result};
