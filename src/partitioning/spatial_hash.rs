use core::fmt;

use smallvec::SmallVec;

use crate::math::{Point, Real};
use crate::shape::PlacedPipe;
use crate::utils::hashmap::HashMap;

/// Integer coordinates of a cell of a [`SpatialHashGrid`].
///
/// `x` is always in `[0, num_cells_x)`. `y` is unbounded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    /// Index of the cell around the circumference.
    pub x: i64,
    /// Index of the cell along the elevation axis.
    pub y: i64,
}

impl CellKey {
    /// Creates a new cell key.
    pub const fn new(x: i64, y: i64) -> Self {
        CellKey { x, y }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// A uniform grid over the unrolled manhole wall, bucketing pipes by the cell containing
/// their center.
///
/// The cells are at least as large as the largest possible interaction distance between two
/// pipes (the required spacing plus twice the largest outer radius), so any two pipes closer
/// than the spacing lie in the same cell or in neighboring cells. The `x` axis wraps around
/// the circumference: the last column of cells is adjacent to the first one.
///
/// Buckets store indices into the slice of pipes the grid was built from.
#[derive(Clone, Debug)]
pub struct SpatialHashGrid {
    cell_size: Real,
    cell_width_x: Real,
    num_cells_x: i64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl SpatialHashGrid {
    /// Buckets `pipes` into a new grid.
    ///
    /// Returns `None` if `pipes` is empty since no cell size can be derived from it.
    pub fn new(circumference: Real, min_spacing: Real, pipes: &[PlacedPipe]) -> Option<Self> {
        let cell_size = Self::choose_cell_size(min_spacing, pipes)?;

        // The columns are stretched so that they tile the circumference exactly.
        let num_cells_x = ((circumference / cell_size).floor() as i64).max(1);
        let cell_width_x = circumference / num_cells_x as Real;

        let mut grid = SpatialHashGrid {
            cell_size,
            cell_width_x,
            num_cells_x,
            cells: HashMap::default(),
        };

        for (i, pipe) in pipes.iter().enumerate() {
            let key = grid.cell_at(&pipe.center);
            grid.cells.entry(key).or_default().push(i);
        }

        log::debug!(
            "Spatial hash grid: cell size {}, {} columns of width {}, {} occupied cells for {} pipes.",
            grid.cell_size,
            grid.num_cells_x,
            grid.cell_width_x,
            grid.cells.len(),
            pipes.len()
        );

        Some(grid)
    }

    /// The required spacing plus the largest outer diameter among `pipes`.
    pub fn choose_cell_size(min_spacing: Real, pipes: &[PlacedPipe]) -> Option<Real> {
        pipes
            .iter()
            .map(|pipe| pipe.outer_radius)
            .reduce(Real::max)
            .map(|max_radius| min_spacing + max_radius * 2.0)
    }

    /// The minimum extent of a cell along both axes.
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The actual extent of a cell along the circumference.
    ///
    /// This is never smaller than [`Self::cell_size`].
    pub fn cell_width_x(&self) -> Real {
        self.cell_width_x
    }

    /// Number of cell columns around the circumference.
    pub fn num_cells_x(&self) -> i64 {
        self.num_cells_x
    }

    /// Number of non-empty cells.
    pub fn num_occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// The cell containing the given point of the unrolled wall.
    ///
    /// Row indices saturate at `i64::MIN` and `i64::MAX` for points extremely far from the
    /// datum relative to the cell size.
    pub fn cell_at(&self, point: &Point) -> CellKey {
        let x = (point.x / self.cell_width_x).floor() as i64;
        let y = (point.y / self.cell_size).floor() as i64;
        CellKey::new(x.rem_euclid(self.num_cells_x), y)
    }

    /// Indices of the pipes whose center lies in the given cell.
    pub fn bucket(&self, key: &CellKey) -> &[usize] {
        self.cells.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates through all the non-empty cells and their pipe indices.
    pub fn cells(&self) -> impl Iterator<Item = (&CellKey, &[usize])> {
        self.cells.iter().map(|(key, bucket)| (key, bucket.as_slice()))
    }

    /// The cell `key` and its eight neighbors, wrapping along `x`.
    ///
    /// When there are fewer than three columns, some neighbors wrap onto the same column. Each
    /// distinct cell is listed only once.
    pub fn neighborhood(&self, key: &CellKey) -> SmallVec<[CellKey; 9]> {
        let mut result: SmallVec<[CellKey; 9]> = SmallVec::new();

        for dy in -1..=1 {
            for dx in -1..=1 {
                let neighbor = CellKey::new(
                    key.x.saturating_add(dx).rem_euclid(self.num_cells_x),
                    key.y.saturating_add(dy),
                );

                if !result.contains(&neighbor) {
                    result.push(neighbor);
                }
            }
        }

        result
    }

    /// Indices of all the pipes lying in the neighborhood of `key`.
    ///
    /// Every pipe index appears at most once.
    pub fn candidates(&self, key: &CellKey) -> impl Iterator<Item = usize> + '_ {
        self.neighborhood(key)
            .into_iter()
            .flat_map(move |neighbor| self.bucket(&neighbor).iter().copied())
    }
}
