use super::Grid;

/// Relative positions of the 8 neighbors of a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// B3/S23: survive on 2 or 3 neighbors, born on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Number of alive neighbors of `(x, y)`.
///
/// Positions outside of the grid count as dead.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(nx), Some(ny)) => grid.get(nx, ny).unwrap_or(false),
                _ => false,
            }
        })
        .count()
}

/// Computes row `x` of the next generation into `dst`.
pub(crate) fn update_row(grid: &Grid, x: usize, dst: &mut [bool]) {
    for (y, cell) in dst.iter_mut().enumerate() {
        let alive = grid.get(x, y).unwrap_or(false);
        *cell = next_state(alive, count_neighbors(grid, x, y));
    }
}
