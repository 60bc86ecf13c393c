// grid.rs - Cell storage and the generation transition

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::config::ConfigError;

/// Fixed-size rectangular field of alive/dead cells.
///
/// The grid has hard edges: cells past the border are treated as dead, so
/// edge and corner cells see fewer than 8 neighbors. A second buffer holds
/// the next generation while a step is in progress; outside of `step` the
/// `cells` buffer is always the authoritative state.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Zero-sized dimensions are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
            scratch: vec![false; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn assert_in_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.assert_in_bounds(x, y);
        y * self.width + x
    }

    /// Returns the state of one cell. Panics when the coordinate is out of
    /// bounds; callers are expected to stay inside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Overwrites one cell immediately (toggle, randomize and pattern
    /// stamping all go through here).
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    /// Row-major view of the current generation, for read-only rendering.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Counts alive cells in the Moore neighborhood. Neighbors past the
    /// border are simply not counted, never wrapped around.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        self.assert_in_bounds(x, y);
        let mut count = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || nx >= self.width as isize || ny < 0 || ny >= self.height as isize {
                    continue;
                }
                if self.cells[ny as usize * self.width + nx as usize] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation under B3/S23.
    ///
    /// Every cell is evaluated against the pre-step snapshot before any
    /// state is committed, so neighbor counts are never polluted by cells
    /// that already changed this generation. The commit is a buffer swap;
    /// the scratch buffer is fully rewritten on every pass.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let count = self.count_alive_neighbors(x, y);
                let alive = self.cells[y * self.width + x];
                self.scratch[y * self.width + x] = match (alive, count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    fn packed_words(&self) -> Vec<u64> {
        let mut words = vec![0u64; self.cells.len().div_ceil(64)];
        for (i, &alive) in self.cells.iter().enumerate() {
            if alive {
                words[i / 64] |= 1 << (i % 64);
            }
        }
        words
    }

    /// Hash of the full cell state. Equal states always produce equal
    /// fingerprints; distinct states may collide in theory, so tests that
    /// care about identity compare `cells()` directly instead.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.packed_words().hash(&mut hasher);
        hasher.finish()
    }

    /// Total number of alive cells.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Sets each cell independently alive with the given probability.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, probability_alive: f64) {
        let probability = probability_alive.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = rng.gen_bool(probability);
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
