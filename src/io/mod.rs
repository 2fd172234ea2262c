/// Command-line interface for generating and printing puzzles
pub mod cli;
/// Defaults and named constants
pub mod configuration;
/// Human-readable folding instructions
pub mod description;
/// Error types for generation and configuration
pub mod error;
/// Triangle colour sets
pub mod palette;
