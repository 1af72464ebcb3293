mod error;
mod grid;
mod rule;

pub use error::{Error, Result};
pub use grid::Grid;
pub use rule::{count_neighbors, next_state, NEIGHBOR_OFFSETS};

use rayon::prelude::*;

/// Worlds at least this wide are updated on the rayon pool under [`Parallelism::Auto`].
pub const PARALLEL_MIN_SIDE: usize = 64;

/// How `step` distributes rows between threads.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Parallelism {
    /// Parallel for worlds of at least [`PARALLEL_MIN_SIDE`] cells per side.
    #[default]
    Auto,
    /// One rayon task per row.
    Always,
    /// Single-threaded loop.
    Never,
}

/// A single `(x, y, alive)` assignment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellAssignment {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

impl CellAssignment {
    pub fn alive(x: usize, y: usize) -> Self {
        Self { x, y, alive: true }
    }
}

/// Game of Life on a `size x size` world with dead borders.
///
/// Generations are double-buffered: `step` reads `cells_curr`, writes
/// `cells_next`, then swaps them.
pub struct LifeEngine {
    size: usize,
    cells_curr: Option<Grid>,
    cells_next: Option<Grid>,
    generation: u64,
    parallelism: Parallelism,
}

impl LifeEngine {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfiguration(
                "world size must be greater than zero".to_string(),
            ));
        }
        if size.checked_mul(size).is_none() {
            return Err(Error::InvalidConfiguration(format!(
                "{0}x{0} world is too large",
                size
            )));
        }
        Ok(Self {
            size,
            cells_curr: None,
            cells_next: None,
            generation: 0,
            parallelism: Parallelism::default(),
        })
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Number of generations computed since the grid was last replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current generation, `None` until a grid has been set.
    pub fn grid(&self) -> Option<&Grid> {
        self.cells_curr.as_ref()
    }

    pub fn population(&self) -> Option<usize> {
        self.cells_curr.as_ref().map(Grid::population)
    }

    /// Replace the current generation.
    ///
    /// On error the previous grid is kept.
    pub fn set_grid(&mut self, grid: Grid) -> Result<()> {
        if !grid.is_square_of(self.size) {
            return Err(Error::InvalidArgument(format!(
                "grid is {}x{}, expected {}x{}",
                grid.rows(),
                grid.cols(),
                self.size,
                self.size
            )));
        }
        self.cells_curr = Some(grid);
        self.generation = 0;
        Ok(())
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool> {
        let grid = self.cells_curr.as_ref().ok_or(Error::NotInitialized)?;
        grid.get(x, y).ok_or(Error::IndexOutOfRange {
            x,
            y,
            size: self.size,
        })
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let size = self.size;
        let grid = self.cells_curr.as_mut().ok_or(Error::NotInitialized)?;
        if x >= size || y >= size {
            return Err(Error::IndexOutOfRange { x, y, size });
        }
        grid.set(x, y, alive);
        Ok(())
    }

    /// Apply assignments in order, stopping at the first failing one.
    pub fn set_cells<I>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = CellAssignment>,
    {
        for CellAssignment { x, y, alive } in cells {
            self.set_cell(x, y, alive)?;
        }
        Ok(())
    }

    /// Advance the world by one generation.
    pub fn step(&mut self) -> Result<()> {
        let size = self.size;
        let curr = self.cells_curr.as_ref().ok_or(Error::NotInitialized)?;
        let next = match &mut self.cells_next {
            Some(next) => next,
            empty => empty.insert(Grid::blank(size, size)?),
        };

        let parallel = match self.parallelism {
            Parallelism::Auto => size >= PARALLEL_MIN_SIDE,
            Parallelism::Always => true,
            Parallelism::Never => false,
        };
        if parallel {
            next.cells_mut()
                .par_chunks_mut(size)
                .enumerate()
                .for_each(|(x, row)| rule::update_row(curr, x, row));
        } else {
            next.cells_mut()
                .chunks_mut(size)
                .enumerate()
                .for_each(|(x, row)| rule::update_row(curr, x, row));
        }

        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
        self.generation += 1;
        log::trace!("generation {} computed (parallel: {})", self.generation, parallel);
        Ok(())
    }
}
