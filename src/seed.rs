use crate::{CellAssignment, Grid, LifeEngine, Pattern, Result};

/// Source of the first generation.
pub enum Seed {
    /// Every cell alive with probability `fill_rate`.
    Random { fill_rate: f64, seed: Option<u64> },
    /// Explicit assignments on top of a dead world.
    Cells(Vec<CellAssignment>),
    /// A built-in pattern placed in the middle of a dead world.
    Pattern(&'static Pattern),
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random {
            fill_rate: Grid::FILL_RATE,
            seed: None,
        }
    }
}

impl Seed {
    /// Install the first generation into `engine`.
    pub fn apply(&self, engine: &mut LifeEngine) -> Result<()> {
        let size = engine.size();
        match self {
            Seed::Random { fill_rate, seed } => {
                engine.set_grid(Grid::random(size, *seed, *fill_rate)?)
            }
            Seed::Cells(cells) => {
                engine.set_grid(Grid::blank(size, size)?)?;
                engine.set_cells(cells.iter().copied())
            }
            Seed::Pattern(pattern) => {
                engine.set_grid(Grid::blank(size, size)?)?;
                engine.set_cells(
                    pattern
                        .centered_in(size)
                        .map(|(x, y)| CellAssignment::alive(x, y)),
                )
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Seed::Random {
                fill_rate,
                seed: Some(seed),
            } => format!("random (fill rate {}, seed {})", fill_rate, seed),
            Seed::Random { fill_rate, .. } => format!("random (fill rate {})", fill_rate),
            Seed::Cells(cells) => format!("{} explicit cells", cells.len()),
            Seed::Pattern(pattern) => format!("pattern '{}'", pattern.name),
        }
    }
}
