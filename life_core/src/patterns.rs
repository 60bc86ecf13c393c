// patterns.rs - Preset seed configurations

use crate::grid::Grid;

/// A named seed configuration, as `(x, y)` cells laid out for the default
/// 50x50 grid. Stamping clips anything past the target grid's edges, so
/// the catalog is safe on smaller grids too.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Clears the grid and sets every in-bounds pattern cell alive.
    pub fn stamp(&self, grid: &mut Grid) {
        grid.clear();
        for &(x, y) in self.cells {
            if x < grid.width() && y < grid.height() {
                grid.set(x, y, true);
            }
        }
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 5), (7, 6), (5, 7), (6, 7), (7, 7)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(23, 24), (24, 24), (25, 24)],
    },
    Pattern {
        name: "Toad",
        cells: &[(24, 23), (25, 23), (26, 23), (23, 24), (24, 24), (25, 24)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(9, 9), (10, 9), (9, 10), (10, 10), (11, 11), (12, 11), (11, 12), (12, 12)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (23, 19), (24, 19), (25, 19), (29, 19), (30, 19), (31, 19),
            (21, 21), (26, 21), (28, 21), (33, 21),
            (21, 22), (26, 22), (28, 22), (33, 22),
            (21, 23), (26, 23), (28, 23), (33, 23),
            (23, 24), (24, 24), (25, 24), (29, 24), (30, 24), (31, 24),
            // Bottom half (mirrored)
            (23, 26), (24, 26), (25, 26), (29, 26), (30, 26), (31, 26),
            (21, 27), (26, 27), (28, 27), (33, 27),
            (21, 28), (26, 28), (28, 28), (33, 28),
            (21, 29), (26, 29), (28, 29), (33, 29),
            (23, 31), (24, 31), (25, 31), (29, 31), (30, 31), (31, 31),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(24, 24), (25, 24), (25, 23), (24, 25), (23, 25)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn catalog_fits_the_default_grid() {
        for pattern in PATTERNS {
            assert!(!pattern.cells.is_empty(), "{} is empty", pattern.name);
            for &(x, y) in pattern.cells {
                assert!(
                    x < 50 && y < 50,
                    "{} cell ({x}, {y}) outside the 50x50 layout",
                    pattern.name
                );
            }
        }
    }

    #[test]
    fn stamp_replaces_previous_contents() {
        let mut grid = Grid::new(50, 50).unwrap();
        grid.set(49, 49, true);
        let blinker = find("Blinker");
        blinker.stamp(&mut grid);
        assert_eq!(grid.count_alive(), blinker.cells.len());
        assert!(!grid.get(49, 49));
    }

    #[test]
    fn stamp_clips_cells_outside_a_small_grid() {
        let mut grid = Grid::new(10, 10).unwrap();
        find("Pulsar").stamp(&mut grid);
        assert_eq!(grid.count_alive(), 0);
        find("Glider").stamp(&mut grid);
        assert_eq!(grid.count_alive(), 5);
    }

    #[test]
    fn glider_translates_diagonally_every_four_generations() {
        let mut grid = Grid::new(20, 20).unwrap();
        let glider = find("Glider");
        glider.stamp(&mut grid);
        for _ in 0..4 {
            grid.step();
        }
        assert_eq!(grid.count_alive(), glider.cells.len());
        for &(x, y) in glider.cells {
            assert!(grid.get(x + 1, y + 1), "expected alive cell at ({}, {})", x + 1, y + 1);
        }
    }
}
