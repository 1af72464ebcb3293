use super::{Error, Result};
use std::fmt;

/// Rectangular matrix of cell states stored row-major.
///
/// `(x, y)` addresses row `x`, column `y`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub const FILL_RATE: f64 = 0.3;

    /// Number of cells in a `rows x cols` grid, if it fits in `usize`.
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols).ok_or_else(|| {
            Error::InvalidArgument(format!("{}x{} cells do not fit in memory", rows, cols))
        })
    }

    /// Create a grid with every cell dead.
    pub fn blank(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            cells: vec![false; Self::cell_count(rows, cols)?],
            rows,
            cols,
        })
    }

    /// Build a grid from a list of rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::InvalidArgument(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                cols
            )));
        }
        let n = rows.len();
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            rows: n,
            cols,
        })
    }

    /// Create a `side x side` grid with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` - probability of a cell being alive, in `[0, 1]`
    pub fn random(side: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidArgument(format!(
                "fill rate {} is not a probability",
                fill_rate
            )));
        }
        let n = Self::cell_count(side, side)?;
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let cells = (0..n).map(|_| rng.gen_bool(fill_rate)).collect();
        Ok(Self {
            cells,
            rows: side,
            cols: side,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has the given side length in both dimensions.
    pub fn is_square_of(&self, side: usize) -> bool {
        self.rows == side && self.cols == side
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.rows && y < self.cols {
            Some(self.cells[x * self.cols + y])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x * self.cols + y] = state;
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks_exact(0)` panics, zero-width grids have no visible rows anyway
        self.cells.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
