//! Pure fold geometry for the triangle chain
//!
//! Given the most recent triangle and a requested fold direction, these
//! functions compute where the next triangle lands and how it is oriented.
//! They are total: every input maps to a well-defined next state, and the
//! pattern store decides afterwards whether that state is acceptable.

use crate::spatial::coordinates::GridPos;

/// Corner of a grid cell occupied by a triangle's right angle
///
/// The four states are 1-indexed and wrap modulo 4, so rotation arithmetic
/// maps 0 back onto the fourth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Right angle points to the cell's top-right corner
    TopRight = 1,
    /// Right angle points to the cell's bottom-right corner
    BottomRight = 2,
    /// Right angle points to the cell's bottom-left corner
    BottomLeft = 3,
    /// Right angle points to the cell's top-left corner
    TopLeft = 4,
}

impl Rotation {
    /// Rotation after the given number of quarter turns
    const fn turned(self, quarter_turns: u8) -> Self {
        match (self as u8 - 1 + quarter_turns) % 4 {
            0 => Self::TopRight,
            1 => Self::BottomRight,
            2 => Self::BottomLeft,
            _ => Self::TopLeft,
        }
    }

    /// The 180-degree opposite rotation, produced by a flat fold
    pub const fn opposite(self) -> Self {
        self.turned(2)
    }

    /// One quarter turn in the direction selected by the clockwise flag,
    /// produced by a layer fold
    pub const fn adjacent(self, clockwise: bool) -> Self {
        self.turned(if clockwise { 1 } else { 3 })
    }
}

/// One triangle in the chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    /// Discrete orientation within its grid cell
    pub rotation: Rotation,
    /// Whether the next rotation steps clockwise; also selects which of two
    /// neighbour cells a flat fold advances into
    pub clockwise: bool,
    /// 0-based order in which the triangle was committed
    pub index: usize,
}

/// Direction of one fold step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldDirection {
    /// Move one layer down at the same row/column
    LayerDown,
    /// Stay on the layer and advance one lattice step
    Flat,
    /// Move one layer up at the same row/column
    LayerUp,
}

impl FoldDirection {
    /// All directions, in the order the generator's round-robin walks them
    pub const ALL: [Self; 3] = [Self::LayerDown, Self::Flat, Self::LayerUp];

    /// Signed layer displacement: -1, 0, or +1
    pub const fn layer_shift(self) -> i32 {
        match self {
            Self::LayerDown => -1,
            Self::Flat => 0,
            Self::LayerUp => 1,
        }
    }
}

/// One committed step of the chain: position, occupying triangle, and the
/// fold that produced it
///
/// The seed triangle carries [`FoldDirection::Flat`] as a sentinel; no fold
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldResult {
    /// Grid slot the triangle occupies
    pub position: GridPos,
    /// The triangle itself
    pub triangle: Triangle,
    /// Fold direction that reached this slot
    pub fold: FoldDirection,
}

/// Lattice step a flat fold takes, as `[row delta, column delta]`
///
/// Encodes which edge of the current triangle is shared with the next one
/// when the paper unfolds flat: each rotation exposes two candidate edges and
/// the clockwise flag picks between them.
pub const fn flat_step(rotation: Rotation, clockwise: bool) -> [i32; 2] {
    const UP: [i32; 2] = [-1, 0];
    const DOWN: [i32; 2] = [1, 0];
    const LEFT: [i32; 2] = [0, -1];
    const RIGHT: [i32; 2] = [0, 1];

    match rotation {
        Rotation::TopRight => {
            if clockwise {
                RIGHT
            } else {
                UP
            }
        }
        Rotation::BottomRight => {
            if clockwise {
                DOWN
            } else {
                RIGHT
            }
        }
        Rotation::BottomLeft => {
            if clockwise {
                LEFT
            } else {
                DOWN
            }
        }
        Rotation::TopLeft => {
            if clockwise {
                UP
            } else {
                LEFT
            }
        }
    }
}

/// Compute the chain's next step from its previous step and a fold direction
///
/// A flat fold advances one lattice step on the same layer, flips the
/// rotation to its opposite, and inverts the clockwise flag. A layer fold
/// moves to the adjacent layer at the same row/column and turns the rotation
/// one quarter turn in the clockwise-flag direction, leaving the flag as is.
pub const fn next_fold_result(prev: &FoldResult, fold: FoldDirection, index: usize) -> FoldResult {
    let Triangle {
        rotation,
        clockwise,
        ..
    } = prev.triangle;

    match fold {
        FoldDirection::Flat => FoldResult {
            position: prev.position.stepped(flat_step(rotation, clockwise)),
            triangle: Triangle {
                rotation: rotation.opposite(),
                clockwise: !clockwise,
                index,
            },
            fold,
        },
        FoldDirection::LayerDown | FoldDirection::LayerUp => FoldResult {
            position: prev.position.shifted_layer(fold.layer_shift()),
            triangle: Triangle {
                rotation: rotation.adjacent(clockwise),
                clockwise,
                index,
            },
            fold,
        },
    }
}
