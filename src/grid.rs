use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which neighbor coordinates `count_live_neighbors` is allowed to scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborBounds {
    /// Every coordinate in `0..size` is scanned.
    #[default]
    Inclusive,
    /// Bottom and left neighbors must sit strictly above 0, so row and
    /// column 0 never contribute through those directions.
    SkipLowEdge,
}

/// Square board of alive/dead cells, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Vec<bool>>,
    pub(crate) generation: u64,
    pub(crate) bounds: NeighborBounds,
}

impl Grid {
    /// All-dead `size`×`size` grid at generation 1.
    pub fn new(size: usize) -> Self {
        Self::with_bounds(size, NeighborBounds::default())
    }

    pub fn with_bounds(size: usize, bounds: NeighborBounds) -> Self {
        Self {
            size,
            cells: vec![vec![false; size]; size],
            generation: 1,
            bounds,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn bounds(&self) -> NeighborBounds {
        self.bounds
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[x][y]
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.size && y < self.size {
            self.cells[x][y] = alive;
        }
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|&&cell| cell)
            .count()
    }

    /// Coordinates of every live cell, column by column.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .filter(|(_, &alive)| alive)
                .map(move |(y, _)| (x, y))
        })
    }

    /// Sets each cell alive with probability `1 / alive_chance`, one draw per cell.
    /// A chance of 0 leaves the grid as it is.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, alive_chance: u32) {
        if alive_chance == 0 {
            return;
        }
        for column in self.cells.iter_mut() {
            for cell in column.iter_mut() {
                if rng.gen_ratio(1, alive_chance) {
                    *cell = true;
                }
            }
        }
    }

    /// Brings the clamped pointer cell and its four orthogonal neighbours to life.
    pub fn activate_cluster(&mut self, x: isize, y: isize) {
        if self.size == 0 {
            return;
        }
        let max = self.size as isize - 1;
        let x = x.clamp(0, max);
        let y = y.clamp(0, max);

        let cluster = [
            (x, y),
            (x, (y + 1).min(max)), // top
            ((x - 1).max(0), y),   // left
            (x, (y - 1).max(0)),   // bottom
            ((x + 1).min(max), y), // right
        ];
        for (cx, cy) in cluster {
            self.cells[cx as usize][cy as usize] = true;
        }
    }
}
