//! Pattern occupancy store for one generation attempt
//!
//! Maintains the layered grid of committed triangles and the ordered fold
//! sequence that produced them. Rows and columns are fixed by `grid_size`;
//! layers grow on demand in both directions using an offset scheme, so world
//! layer `l` lives at slot `l + layer_offset`. The store also owns the two
//! validity predicates the generator consults: the incremental adjacency rule
//! applied to every candidate and the holistic acceptance check applied once
//! a chain reaches its target length.

use ndarray::Array2;

use crate::algorithm::folding::{FoldDirection, FoldResult, Triangle};
use crate::algorithm::validity::{
    Difficulty, FOOTPRINT_CHECK_MIN_LENGTH, LAYER_CHECK_MIN_LENGTH,
};
use crate::spatial::coordinates::GridPos;

/// Orthogonal lattice neighbour offsets
const NEIGHBOUR_STEPS: [[i32; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Layered occupancy store and fold sequence for one pattern
///
/// Renderers and the description printer consume the read surface only:
/// [`folds`](Self::folds), [`cell`](Self::cell),
/// [`start_clockwise`](Self::start_clockwise),
/// [`layers_count`](Self::layers_count), [`len`](Self::len), and
/// [`grid_size`](Self::grid_size). The occupancy arrays stay private.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// One occupancy grid per touched layer, ordered bottom to top
    layers: Vec<Array2<Option<Triangle>>>,
    /// Maps world layer to `layers` slot: slot = world layer + offset
    layer_offset: i32,
    /// Committed steps in generation order
    folds: Vec<FoldResult>,
    /// Fixed odd side length bounding rows and columns
    grid_size: usize,
}

impl Pattern {
    /// Create an empty pattern over a `grid_size` × `grid_size` lattice
    pub const fn new(grid_size: usize) -> Self {
        Self {
            layers: Vec::new(),
            layer_offset: 0,
            folds: Vec::new(),
            grid_size,
        }
    }

    /// Side length of the bounded lattice
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of committed triangles
    pub const fn len(&self) -> usize {
        self.folds.len()
    }

    /// Whether no triangle has been committed yet
    pub const fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Committed steps in generation order
    pub fn folds(&self) -> &[FoldResult] {
        &self.folds
    }

    /// Most recently committed step, the one the next fold extends
    pub fn prev_result(&self) -> Option<&FoldResult> {
        self.folds.last()
    }

    /// Clockwise flag of the seed triangle; `false` while empty
    pub fn start_clockwise(&self) -> bool {
        self.folds.first().is_some_and(|f| f.triangle.clockwise)
    }

    /// Number of distinct layers the chain touches
    ///
    /// Layers are materialized only when a triangle lands on them, so the
    /// slot count is exactly the touched-layer count.
    pub const fn layers_count(&self) -> usize {
        self.layers.len()
    }

    /// Triangle occupying a grid slot, or `None` when empty or out of bounds
    pub fn cell(&self, position: GridPos) -> Option<Triangle> {
        if !position.in_bounds(self.grid_size) {
            return None;
        }
        let slot = position.layer + self.layer_offset;
        if slot < 0 {
            return None;
        }
        self.layers
            .get(slot as usize)?
            .get([position.row as usize, position.column as usize])
            .copied()
            .flatten()
    }

    /// Clear occupancy and the fold sequence, keeping `grid_size`
    pub fn reset(&mut self) {
        self.layers.clear();
        self.layer_offset = 0;
        self.folds.clear();
    }

    /// Commit a step unconditionally
    ///
    /// Trusted-caller contract: the generator validates with
    /// [`can_add_fold_result`](Self::can_add_fold_result) first; this method
    /// enforces nothing. Out-of-bounds rows or columns are never written.
    pub fn add_fold_result(&mut self, result: FoldResult) {
        if result.position.in_bounds(self.grid_size) {
            let slot = self.ensure_layer(result.position.layer);
            let row = result.position.row as usize;
            let column = result.position.column as usize;
            if let Some(layer) = self.layers.get_mut(slot) {
                if let Some(cell) = layer.get_mut([row, column]) {
                    *cell = Some(result.triangle);
                }
            }
            self.folds.push(result);
        }
    }

    /// Whether a candidate step may be committed
    ///
    /// True iff the candidate's row and column are in bounds, its slot is
    /// unoccupied, and the occupied same-layer neighbours beyond the flat-fold
    /// source stay within the difficulty's budget. Pure with respect to
    /// current occupancy.
    pub fn can_add_fold_result(&self, candidate: &FoldResult, difficulty: Difficulty) -> bool {
        if !candidate.position.in_bounds(self.grid_size) {
            return false;
        }
        if self.cell(candidate.position).is_some() {
            return false;
        }

        let neighbours = self.occupied_neighbours(candidate.position);
        // A flat fold arrives from a same-layer neighbour; that contact is
        // the chain itself, not an extra touch.
        let arrived_flat = usize::from(matches!(candidate.fold, FoldDirection::Flat));
        neighbours.saturating_sub(arrived_flat) <= difficulty.extra_neighbour_budget()
    }

    /// Holistic acceptance check over the completed chain
    ///
    /// Chains of 3+ triangles must span at least two rows and two columns so
    /// the silhouette is never a straight strip. Medium and hard chains of 4+
    /// triangles must additionally touch at least two layers, guaranteeing the
    /// physical puzzle needs a 3-D fold.
    pub fn is_valid(&self, difficulty: Difficulty) -> bool {
        if self.folds.len() >= FOOTPRINT_CHECK_MIN_LENGTH && !self.footprint_spreads() {
            return false;
        }
        if difficulty.requires_layer_fold()
            && self.folds.len() >= LAYER_CHECK_MIN_LENGTH
            && self.layers_count() < 2
        {
            return false;
        }
        true
    }

    /// Whether the chain's footprint covers at least two rows and two columns
    fn footprint_spreads(&self) -> bool {
        let mut rows = None;
        let mut columns = None;
        for fold in &self.folds {
            rows = widen(rows, fold.position.row);
            columns = widen(columns, fold.position.column);
        }
        spans_two(rows) && spans_two(columns)
    }

    /// Occupied orthogonal neighbours of a slot on its own layer
    fn occupied_neighbours(&self, position: GridPos) -> usize {
        NEIGHBOUR_STEPS
            .iter()
            .filter(|&&step| self.cell(position.stepped(step)).is_some())
            .count()
    }

    /// Materialize the slot for a world layer, growing in either direction
    ///
    /// Mirrors offset-based grid extension: prepending a layer shifts the
    /// offset so existing world layers keep their mapping.
    fn ensure_layer(&mut self, layer: i32) -> usize {
        if self.layers.is_empty() {
            self.layer_offset = -layer;
            self.layers.push(self.empty_layer());
            return 0;
        }

        let mut slot = layer + self.layer_offset;
        while slot < 0 {
            self.layers.insert(0, self.empty_layer());
            self.layer_offset += 1;
            slot += 1;
        }
        while slot as usize >= self.layers.len() {
            self.layers.push(self.empty_layer());
        }
        slot as usize
    }

    fn empty_layer(&self) -> Array2<Option<Triangle>> {
        Array2::from_elem((self.grid_size, self.grid_size), None)
    }
}

/// Extend an inclusive min/max range with a value
const fn widen(range: Option<(i32, i32)>, value: i32) -> Option<(i32, i32)> {
    match range {
        None => Some((value, value)),
        Some((min, max)) => Some((
            if value < min { value } else { min },
            if value > max { value } else { max },
        )),
    }
}

/// Whether an inclusive range covers at least two distinct values
const fn spans_two(range: Option<(i32, i32)>) -> bool {
    match range {
        None => false,
        Some((min, max)) => max > min,
    }
}
