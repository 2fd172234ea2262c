//! Defaults and named constants for the generator and CLI

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Maximum whole-attempt retries before generation reports exhaustion
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Grid-size sentinel: derive the smallest odd size fitting the target
pub const AUTO_GRID_SIZE: i32 = 0;

/// Consecutive triangles sharing one colour within a palette
pub const TRIANGLES_PER_COLOR: usize = 5;
