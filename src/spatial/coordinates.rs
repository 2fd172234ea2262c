//! Coordinates on the layered triangle grid
//!
//! Rows and columns index a square lattice whose cells each host two triangle
//! slots (one per diagonal). Layers distinguish sheets of paper stacked on the
//! same row/column after a perpendicular fold. Coordinates are signed so that
//! candidates one step outside the grid stay representable; the pattern store
//! rejects them instead of storing them.

/// Position of one triangle slot on the layered grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Stacked sheet index; 0 is the seed layer, negative layers sit below it
    pub layer: i32,
    /// Row on the square lattice, valid inside `[0, grid_size)`
    pub row: i32,
    /// Column on the square lattice, valid inside `[0, grid_size)`
    pub column: i32,
}

impl GridPos {
    /// Create a position from its three components
    pub const fn new(layer: i32, row: i32, column: i32) -> Self {
        Self { layer, row, column }
    }

    /// Position one lattice step away on the same layer
    pub const fn stepped(self, delta: [i32; 2]) -> Self {
        Self {
            layer: self.layer,
            row: self.row + delta[0],
            column: self.column + delta[1],
        }
    }

    /// Position on an adjacent layer at the same row/column
    pub const fn shifted_layer(self, delta: i32) -> Self {
        Self {
            layer: self.layer + delta,
            row: self.row,
            column: self.column,
        }
    }

    /// Whether row and column both fall inside a square grid of the given size
    pub const fn in_bounds(self, grid_size: usize) -> bool {
        let size = grid_size as i32;
        self.row >= 0 && self.row < size && self.column >= 0 && self.column < size
    }
}

#[cfg(test)]
mod tests {
    use super::GridPos;

    #[test]
    fn test_stepped_moves_within_layer() {
        let pos = GridPos::new(1, 2, 3);
        assert_eq!(pos.stepped([-1, 0]), GridPos::new(1, 1, 3));
        assert_eq!(pos.stepped([0, 1]), GridPos::new(1, 2, 4));
    }

    #[test]
    fn test_shifted_layer_keeps_row_and_column() {
        let pos = GridPos::new(0, 2, 2);
        assert_eq!(pos.shifted_layer(-1), GridPos::new(-1, 2, 2));
        assert_eq!(pos.shifted_layer(1).row, 2);
    }

    #[test]
    fn test_in_bounds_rejects_edges() {
        assert!(GridPos::new(0, 0, 4).in_bounds(5));
        assert!(!GridPos::new(0, -1, 2).in_bounds(5));
        assert!(!GridPos::new(0, 2, 5).in_bounds(5));
        // Layer never affects bounds; layers grow freely in both directions
        assert!(GridPos::new(-7, 2, 2).in_bounds(5));
    }
}
