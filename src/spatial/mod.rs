//! Spatial data structures for the layered triangle grid
//!
//! This module contains:
//! - Layered grid coordinates shared by the fold geometry and the store
//! - The pattern occupancy store with its validity predicates

/// Layered grid coordinates
pub mod coordinates;
/// Pattern occupancy store and read surface
pub mod pattern;
