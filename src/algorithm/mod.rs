/// Retry-driven pattern construction and configuration
pub mod executor;
/// Pure fold geometry: rotations, directions, and the next-state function
pub mod folding;
/// Difficulty levels and the shape rules they control
pub mod validity;
