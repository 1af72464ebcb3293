/// A small named configuration, given as alive `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

impl Pattern {
    /// Case-insensitive lookup among [`PATTERNS`].
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|p| p.name)
    }

    /// `(rows, cols)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(r, c), &(x, y)| (r.max(x + 1), c.max(y + 1)))
    }

    /// Cells of the pattern shifted so that it sits in the middle of a `side x side` world.
    ///
    /// Patterns wider than the world are anchored at the top-left corner.
    pub fn centered_in(&self, side: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (rows, cols) = self.extent();
        let (dx, dy) = (side.saturating_sub(rows) / 2, side.saturating_sub(cols) / 2);
        self.cells.iter().map(move |&(x, y)| (x + dx, y + dy))
    }
}
