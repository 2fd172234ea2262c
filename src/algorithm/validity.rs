//! Difficulty levels and the shape rules keyed to them
//!
//! Difficulty tunes how permissive the geometry may be: stricter levels keep
//! the folded silhouette visually simple by rejecting candidates that touch
//! too many already-placed triangles, while the final acceptance check rules
//! out degenerate silhouettes that make the puzzle trivial.

use std::fmt;

/// Puzzle difficulty, ordered from most to least restrictive geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    /// Simple snaking shapes: a new triangle may touch no placed triangle
    /// besides the one it folds from
    Easy,
    /// One extra touching triangle is tolerated, allowing folded-back shapes
    Medium,
    /// Any non-overlapping placement is accepted, including tight spirals
    Hard,
}

/// Chains shorter than this skip the footprint-spread acceptance check
pub const FOOTPRINT_CHECK_MIN_LENGTH: usize = 3;

/// Chains shorter than this skip the multiple-layer acceptance check
pub const LAYER_CHECK_MIN_LENGTH: usize = 4;

impl Difficulty {
    /// Occupied same-layer neighbours a candidate cell may touch beyond the
    /// cell a flat fold arrives from
    ///
    /// This is the incremental adjacency rule: a pure function of difficulty
    /// alone, applied by the store against current occupancy.
    pub const fn extra_neighbour_budget(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            // A lattice cell has four orthogonal neighbours and one is the
            // fold source at most, so 3 never rejects.
            Self::Hard => 3,
        }
    }

    /// Whether the finished pattern must span at least two layers
    ///
    /// Medium and hard puzzles must need a real 3-D fold; easy ones may lie
    /// flat in a single sheet.
    pub const fn requires_layer_fold(self) -> bool {
        match self {
            Self::Easy => false,
            Self::Medium | Self::Hard => true,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}
